//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! extracción de cuerpos JSON y generación de slugs.

pub mod errors;
pub mod extract;
pub mod slug;
pub mod validation;
