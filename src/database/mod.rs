//! Módulo de base de datos
//!
//! Maneja la conexión y el ciclo de vida del pool PostgreSQL

pub mod connection;

pub use connection::DatabaseConnection;
