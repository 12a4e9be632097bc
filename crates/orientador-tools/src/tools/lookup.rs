//! Exact-name lookups between universities and careers

use orientador_catalog::Catalog;
use orientador_domain::{ToolParam, ToolSpec};
use serde::Deserialize;

use super::bullet_list;

/// Tool name: careers of a university
pub const UNIVERSITY_CAREERS: &str = "buscarPorUniversidad";

/// Tool name: universities offering a career
pub const CAREER_UNIVERSITIES: &str = "buscarPorCarrera";

/// Parameters naming one university
#[derive(Debug, Deserialize)]
pub struct UniversityParams {
    /// University name
    #[serde(rename = "universidad")]
    pub university: String,
}

/// Parameters naming one career
#[derive(Debug, Deserialize)]
pub struct CareerParams {
    /// Career name
    #[serde(rename = "carrera")]
    pub career: String,
}

/// Declaration of `buscarPorUniversidad`
pub fn university_careers_spec() -> ToolSpec {
    ToolSpec {
        name: UNIVERSITY_CAREERS,
        description: "Busca carreras asociadas a una universidad en el PDF de universidades.",
        params: vec![ToolParam::new("universidad", "Nombre exacto de la universidad")],
    }
}

/// Declaration of `buscarPorCarrera`
pub fn career_universities_spec() -> ToolSpec {
    ToolSpec {
        name: CAREER_UNIVERSITIES,
        description: "Busca universidades que ofrecen una carrera específica en el PDF de universidades.",
        params: vec![ToolParam::new("carrera", "Nombre exacto de la carrera")],
    }
}

/// Handle `buscarPorUniversidad`
pub fn handle_university_careers(catalog: &Catalog, params: UniversityParams) -> String {
    let university = params.university.trim();
    match catalog.careers_of(university) {
        Some(careers) if !careers.is_empty() => {
            bullet_list(&format!("Carreras en {}:", university), careers)
        }
        _ => format!("No se encontraron carreras para la universidad: {}", university),
    }
}

/// Handle `buscarPorCarrera`
pub fn handle_career_universities(catalog: &Catalog, params: CareerParams) -> String {
    let career = params.career.trim();
    match catalog.universities_of(career) {
        Some(universities) if !universities.is_empty() => {
            bullet_list(&format!("Universidades que ofrecen {}:", career), universities)
        }
        _ => format!("No se encontraron universidades para la carrera: {}", career),
    }
}
