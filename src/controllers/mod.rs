//! Controladores de recursos
//!
//! Cada controlador valida la entrada, llama al repositorio y convierte
//! los resultados vacíos en `AppError::NotFound`.

pub mod company_controller;
pub mod industry_controller;
pub mod invoice_controller;
