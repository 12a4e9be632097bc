//! Keyword search over known names

use orientador_catalog::Catalog;
use orientador_domain::{ToolParam, ToolSpec};
use serde::Deserialize;

use super::bullet_list;

/// Tool name: universities by keyword
pub const SEARCH_UNIVERSITIES: &str = "buscarUniversidadPorPalabra";

/// Tool name: careers by keyword
pub const SEARCH_CAREERS: &str = "buscarCarreraPorPalabra";

/// Parameters carrying a keyword
#[derive(Debug, Deserialize)]
pub struct KeywordParams {
    /// Text to look for inside names
    #[serde(rename = "palabra")]
    pub keyword: String,
}

/// Declaration of `buscarUniversidadPorPalabra`
pub fn search_universities_spec() -> ToolSpec {
    ToolSpec {
        name: SEARCH_UNIVERSITIES,
        description: "Busca universidades cuyo nombre contiene una palabra (sin distinguir mayúsculas).",
        params: vec![ToolParam::new("palabra", "Palabra o fragmento del nombre")],
    }
}

/// Declaration of `buscarCarreraPorPalabra`
pub fn search_careers_spec() -> ToolSpec {
    ToolSpec {
        name: SEARCH_CAREERS,
        description: "Busca carreras cuyo nombre contiene una palabra (sin distinguir mayúsculas).",
        params: vec![ToolParam::new("palabra", "Palabra o fragmento del nombre")],
    }
}

/// Handle `buscarUniversidadPorPalabra`
pub fn handle_search_universities(catalog: &Catalog, params: KeywordParams) -> String {
    let keyword = params.keyword.trim();
    let found = catalog.search_universities(keyword);
    if found.is_empty() {
        return format!("No se encontraron universidades que contengan: {}", keyword);
    }
    bullet_list(&format!("Universidades que contienen \"{}\":", keyword), &found)
}

/// Handle `buscarCarreraPorPalabra`
pub fn handle_search_careers(catalog: &Catalog, params: KeywordParams) -> String {
    let keyword = params.keyword.trim();
    let found = catalog.search_careers(keyword);
    if found.is_empty() {
        return format!("No se encontraron carreras que contengan: {}", keyword);
    }
    bullet_list(&format!("Carreras que contienen \"{}\":", keyword), &found)
}
