pub mod api;
pub mod banner;
pub mod config;
pub mod consts;
pub mod display;
pub mod error;
pub mod orchestrator;
pub mod progress;
pub mod prompt;
pub mod state;
pub mod summary;
