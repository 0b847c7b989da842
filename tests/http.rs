use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Progress {
    completed: u32,
    total: u32,
    percentage: u8,
}

#[derive(Debug, Deserialize)]
struct ChecklistResponse {
    date: String,
    progress: Progress,
}

#[derive(Debug, Deserialize)]
struct DayRecord {
    activities: Vec<serde_json::Value>,
    completed: u32,
    total: u32,
    percentage: u8,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("life_monitor_http_{}_{}", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/checklist")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_dir = unique_data_dir();
    let child = Command::new(env!("CARGO_BIN_EXE_life_monitor"))
        .env("PORT", port.to_string())
        .env("APP_DATA_DIR", data_dir)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_toggle_updates_checklist_progress() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: ChecklistResponse = client
        .get(format!("{}/api/checklist", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!before.date.is_empty());

    let checked: ChecklistResponse = client
        .post(format!("{}/api/checklist/toggle", server.base_url))
        .json(&serde_json::json!({ "category": "sholat", "id": "subuh", "checked": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(checked.progress.completed, before.progress.completed + 1);
    assert_eq!(checked.progress.total, before.progress.total);

    let unchecked: ChecklistResponse = client
        .post(format!("{}/api/checklist/toggle", server.base_url))
        .json(&serde_json::json!({ "category": "sholat", "id": "subuh", "checked": false }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(unchecked.progress.completed, before.progress.completed);
    assert_eq!(unchecked.progress.percentage, before.progress.percentage);
}

#[tokio::test]
async fn http_rejects_unknown_checklist_item() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/checklist/toggle", server.base_url))
        .json(&serde_json::json!({ "category": "sholat", "id": "tahajud", "checked": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_checklist_reset_clears_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    client
        .post(format!("{}/api/checklist/toggle", server.base_url))
        .json(&serde_json::json!({ "category": "water", "id": "water_1", "checked": true }))
        .send()
        .await
        .unwrap();

    let after: ChecklistResponse = client
        .post(format!("{}/api/checklist/reset", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after.progress.completed, 0);
    assert_eq!(after.progress.percentage, 0);
}

#[tokio::test]
async fn http_activity_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = format!("{}/api/activities/2026-08-24", server.base_url);

    let response = client
        .post(&base)
        .json(&serde_json::json!({ "name": "Read", "category": "study" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: serde_json::Value = response.json().await.unwrap();
    let id = created["activity"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["record"]["total"], 1);
    assert_eq!(created["record"]["completed"], 0);
    assert_eq!(created["record"]["percentage"], 0);

    let toggled: serde_json::Value = client
        .post(format!("{base}/{id}/toggle"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled["completed"], true);
    assert_eq!(toggled["record"]["percentage"], 100);

    let updated: DayRecord = client
        .put(format!("{base}/{id}"))
        .json(&serde_json::json!({ "name": "Read a chapter", "priority": "high" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.activities.len(), 1);
    assert_eq!(updated.activities[0]["name"], "Read a chapter");

    let after_delete: DayRecord = client
        .delete(format!("{base}/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after_delete.total, 0);
    assert_eq!(after_delete.completed, 0);
    assert_eq!(after_delete.percentage, 0);

    let missing = client
        .post(format!("{base}/{id}/toggle"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn http_rejects_empty_activity_name() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/activities/2026-08-24", server.base_url))
        .json(&serde_json::json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_weekly_report_validates_week() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/reports/weekly", server.base_url))
        .json(&serde_json::json!({ "week": 0, "year": 2026 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let report: serde_json::Value = client
        .post(format!("{}/api/reports/weekly", server.base_url))
        .json(&serde_json::json!({ "week": 35, "year": 2026 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report["report"]["week"], "2026-W35");
    assert_eq!(report["report"]["daily"].as_array().unwrap().len(), 7);
    assert!(report["message"]["text"].is_string());
}

#[tokio::test]
async fn http_notes_crud() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = format!("{}/api/notes/ideas", server.base_url);

    let response = client
        .post(&base)
        .json(&serde_json::json!({ "title": "Belajar Rust", "content": "mulai dari ownership" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let note: serde_json::Value = response.json().await.unwrap();
    let id = note["id"].as_str().unwrap().to_string();

    let notes: Vec<serde_json::Value> = client
        .get(&base)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(notes.iter().any(|n| n["id"] == id.as_str()));

    let deleted = client
        .delete(format!("{base}/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), 204);

    let unknown = client
        .get(format!("{}/api/notes/shopping", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), 400);
}

#[tokio::test]
async fn http_export_import_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    client
        .post(format!("{}/api/activities/2026-08-25", server.base_url))
        .json(&serde_json::json!({ "name": "Olahraga pagi", "category": "health" }))
        .send()
        .await
        .unwrap();

    let exported: serde_json::Value = client
        .get(format!("{}/api/export", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let imported = client
        .post(format!("{}/api/import", server.base_url))
        .json(&exported)
        .send()
        .await
        .unwrap();
    assert!(imported.status().is_success());

    let re_exported: serde_json::Value = client
        .get(format!("{}/api/export", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(exported, re_exported);
}
