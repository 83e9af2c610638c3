//! Modelo de Company
//!
//! Mapea la tabla `companies`. La clave primaria `code` es el slug del
//! nombre y no cambia una vez creada.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::slug::slugify;

/// Company principal - mapea exactamente a la tabla companies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

impl Company {
    /// Construye una company nueva derivando `code` a partir del nombre.
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            code: slugify(&name),
            name,
            description,
        }
    }
}

/// Fila reducida usada en el listado de companies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_company_derives_code() {
        let company = Company::new("Apple Inc".to_string(), None);
        assert_eq!(company.code, "apple-inc");
        assert_eq!(company.name, "Apple Inc");
        assert_eq!(company.description, None);
    }
}
