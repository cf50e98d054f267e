pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod shell;
pub mod ui;

pub use error::{AppError, Result};
