//! BizTime: API REST sobre companies, industries e invoices.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::build_app;
pub use state::AppState;
