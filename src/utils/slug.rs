//! Generación de slugs para las claves de companies e industries

use deunicode::deunicode;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Convierte un nombre legible en una clave apta para URL.
///
/// Translitera a ASCII (`é` → `e`), pasa a minúsculas, colapsa cada racha
/// de caracteres no alfanuméricos en un único `-` y recorta los guiones de
/// los extremos.
pub fn slugify(text: &str) -> String {
    let lowered = deunicode(text).to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
