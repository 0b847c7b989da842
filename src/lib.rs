pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod labels;
pub mod models;
pub mod progress;
pub mod reports;
pub mod state;
pub mod storage;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_tracker, resolve_data_dir};
