use crate::models::Progress;

pub fn render_index(date_text: &str, progress: Progress) -> String {
    INDEX_HTML
        .replace("{{DATE_TEXT}}", date_text)
        .replace("{{COMPLETED}}", &progress.completed.to_string())
        .replace("{{TOTAL}}", &progress.total.to_string())
        .replace("{{PERCENTAGE}}", &progress.percentage.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="id">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Life Monitor</title>
  <style>
    :root {
      --bg: #0f172a;
      --card: #1e293b;
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --line: rgba(148, 163, 184, 0.18);
      --primary: #6366f1;
      --success: #10b981;
      --warning: #f59e0b;
      --danger: #ef4444;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 28px 16px 56px;
      display: flex;
      justify-content: center;
    }

    .app {
      width: min(920px, 100%);
      display: grid;
      gap: 20px;
    }

    header h1 {
      margin: 0 0 4px;
      font-size: 1.9rem;
    }

    header .date {
      color: var(--muted);
      margin: 0;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 20px;
    }

    .card h2 {
      margin: 0 0 12px;
      font-size: 1.05rem;
      display: flex;
      justify-content: space-between;
      align-items: baseline;
    }

    .card h2 .count {
      color: var(--muted);
      font-size: 0.85rem;
      font-weight: 400;
    }

    .progress-track {
      background: rgba(148, 163, 184, 0.15);
      border-radius: 999px;
      height: 26px;
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: var(--primary);
      color: white;
      font-size: 0.8rem;
      font-weight: 600;
      display: flex;
      align-items: center;
      justify-content: center;
      min-width: 36px;
      transition: width 250ms ease;
    }

    .progress-meta {
      display: flex;
      justify-content: space-between;
      margin-top: 10px;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .message {
      margin-top: 12px;
      padding: 10px 14px;
      border-left: 4px solid var(--primary);
      background: rgba(99, 102, 241, 0.08);
      border-radius: 0 10px 10px 0;
      font-size: 0.95rem;
    }

    .check-item {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 10px 12px;
      border: 1px solid var(--line);
      border-radius: 12px;
      margin-bottom: 8px;
      cursor: pointer;
      user-select: none;
    }

    .check-item:hover {
      border-color: var(--primary);
    }

    .check-item .box {
      width: 20px;
      height: 20px;
      border-radius: 6px;
      border: 2px solid var(--muted);
      flex-shrink: 0;
    }

    .check-item.checked .box {
      background: var(--success);
      border-color: var(--success);
    }

    .check-item.checked .name {
      text-decoration: line-through;
      color: var(--muted);
    }

    .check-item .time {
      margin-left: auto;
      color: var(--muted);
      font-size: 0.82rem;
      white-space: nowrap;
    }

    .water-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(72px, 1fr));
      gap: 10px;
    }

    .water-item {
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 12px 6px;
      text-align: center;
      cursor: pointer;
      user-select: none;
    }

    .water-item.checked {
      background: rgba(59, 130, 246, 0.25);
      border-color: #3b82f6;
    }

    .water-item .num {
      font-size: 1.2rem;
      font-weight: 700;
    }

    .water-item .label {
      color: var(--muted);
      font-size: 0.78rem;
    }

    .toolbar {
      display: flex;
      gap: 12px;
      flex-wrap: wrap;
    }

    button, a.button {
      appearance: none;
      border: 1px solid var(--line);
      background: transparent;
      color: var(--ink);
      border-radius: 10px;
      padding: 10px 16px;
      font-size: 0.9rem;
      cursor: pointer;
      text-decoration: none;
    }

    button:hover, a.button:hover {
      border-color: var(--primary);
    }

    .status {
      color: var(--muted);
      font-size: 0.9rem;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Life Monitor</h1>
      <p class="date">{{DATE_TEXT}}</p>
    </header>

    <section class="card">
      <h2>Progress Hari Ini <span class="count" id="progress-count">{{COMPLETED}}/{{TOTAL}}</span></h2>
      <div class="progress-track">
        <div class="progress-fill" id="progress-fill" style="width: {{PERCENTAGE}}%">{{PERCENTAGE}}%</div>
      </div>
      <div class="progress-meta">
        <span id="progress-detail">Selesai {{COMPLETED}} dari {{TOTAL}}</span>
      </div>
      <div class="message" id="message"></div>
    </section>

    <div id="categories"></div>

    <section class="card toolbar">
      <button id="reset" type="button">Reset hari ini</button>
      <a class="button" href="/api/export">Export data</a>
      <span class="status" id="status"></span>
    </section>
  </main>

  <script>
    const categoriesEl = document.getElementById('categories');
    const fillEl = document.getElementById('progress-fill');
    const countEl = document.getElementById('progress-count');
    const detailEl = document.getElementById('progress-detail');
    const messageEl = document.getElementById('message');
    const statusEl = document.getElementById('status');

    const TITLES = {
      sholat: 'Jadwal Sholat',
      routine: 'Rutin Harian',
      workout: 'Olahraga Wajib',
      extra: 'Extra Workout (Kamis)',
      meals: 'Makan Teratur',
      water: 'Minum Air'
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderProgress = (data) => {
      const p = data.progress;
      fillEl.style.width = `${p.percentage}%`;
      fillEl.textContent = `${p.percentage}%`;
      fillEl.style.background = data.message.color;
      countEl.textContent = `${p.completed}/${p.total}`;
      detailEl.textContent = `Selesai ${p.completed} dari ${p.total}`;
      messageEl.textContent = data.message.text;
      messageEl.style.borderLeftColor = data.message.color;
    };

    const toggle = async (category, id, checked) => {
      const res = await fetch('/api/checklist/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ category, id, checked })
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      render(await res.json());
    };

    const renderCategory = (section) => {
      if (!section.items.length) {
        return null;
      }
      const card = document.createElement('section');
      card.className = 'card';

      const title = document.createElement('h2');
      title.textContent = TITLES[section.category] || section.category;
      const count = document.createElement('span');
      count.className = 'count';
      count.textContent = `${section.progress.completed}/${section.progress.total}`;
      title.appendChild(count);
      card.appendChild(title);

      if (section.category === 'water') {
        const grid = document.createElement('div');
        grid.className = 'water-grid';
        section.items.forEach((item, index) => {
          const div = document.createElement('div');
          div.className = 'water-item' + (item.checked ? ' checked' : '');
          div.innerHTML = `<div class="num">${index + 1}</div><div class="label">Gelas</div>`;
          div.addEventListener('click', () => {
            toggle('water', item.id, !item.checked).catch((err) => setStatus(err.message, 'error'));
          });
          grid.appendChild(div);
        });
        card.appendChild(grid);
        return card;
      }

      section.items.forEach((item) => {
        const div = document.createElement('div');
        div.className = 'check-item' + (item.checked ? ' checked' : '');
        const time = item.time ? `<span class="time">${item.time}</span>` : '';
        div.innerHTML = `<div class="box"></div><span class="name">${item.name}</span>${time}`;
        div.addEventListener('click', () => {
          toggle(section.category, item.id, !item.checked).catch((err) => setStatus(err.message, 'error'));
        });
        card.appendChild(div);
      });
      return card;
    };

    const render = (data) => {
      renderProgress(data);
      categoriesEl.innerHTML = '';
      data.categories.forEach((section) => {
        const card = renderCategory(section);
        if (card) {
          categoriesEl.appendChild(card);
        }
      });
    };

    const load = async () => {
      const res = await fetch('/api/checklist');
      if (!res.ok) {
        throw new Error('Unable to load checklist');
      }
      render(await res.json());
    };

    document.getElementById('reset').addEventListener('click', async () => {
      if (!confirm('Reset semua checklist hari ini?')) {
        return;
      }
      const res = await fetch('/api/checklist/reset', { method: 'POST' });
      if (!res.ok) {
        setStatus('Reset gagal', 'error');
        return;
      }
      render(await res.json());
      setStatus('Checklist direset', 'ok');
    });

    load().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
