pub mod app;
pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod state;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
