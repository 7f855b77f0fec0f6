// src/lib.rs

pub mod api;
pub mod common;
pub mod config;
pub mod models;
pub mod services;
pub mod store;
pub mod viewmodels;

pub use common::error::{AppError, Route, UserFeedback};
pub use config::{AppConfig, AppState};
