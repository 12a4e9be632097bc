//! Detail blocks and comparisons

use orientador_catalog::Catalog;
use orientador_domain::{ToolParam, ToolSpec};
use serde::Deserialize;

use super::lookup::{CareerParams, UniversityParams};
use super::{query_failed, COMPARISON_SEPARATOR};

/// Tool name: text block about a university
pub const UNIVERSITY_DETAIL: &str = "detalleUniversidad";

/// Tool name: text block about a career
pub const CAREER_DETAIL: &str = "detalleCarrera";

/// Tool name: two universities side by side
pub const COMPARE_UNIVERSITIES: &str = "compararUniversidades";

/// Tool name: two careers side by side
pub const COMPARE_CAREERS: &str = "compararCarreras";

/// Parameters naming two universities
#[derive(Debug, Deserialize)]
pub struct UniversityPairParams {
    /// First university
    #[serde(rename = "universidad1")]
    pub first: String,
    /// Second university
    #[serde(rename = "universidad2")]
    pub second: String,
}

/// Parameters naming two careers
#[derive(Debug, Deserialize)]
pub struct CareerPairParams {
    /// First career
    #[serde(rename = "carrera1")]
    pub first: String,
    /// Second career
    #[serde(rename = "carrera2")]
    pub second: String,
}

#[derive(Debug, Clone, Copy)]
enum Subject {
    University,
    Career,
}

impl Subject {
    fn noun(self) -> &'static str {
        match self {
            Subject::University => "la universidad",
            Subject::Career => "la carrera",
        }
    }
}

/// Declaration of `detalleUniversidad`
pub fn university_detail_spec() -> ToolSpec {
    ToolSpec {
        name: UNIVERSITY_DETAIL,
        description: "Devuelve el texto del PDF que describe a una universidad.",
        params: vec![ToolParam::new("universidad", "Nombre de la universidad")],
    }
}

/// Declaration of `detalleCarrera`
pub fn career_detail_spec() -> ToolSpec {
    ToolSpec {
        name: CAREER_DETAIL,
        description: "Devuelve el texto del PDF que describe a una carrera.",
        params: vec![ToolParam::new("carrera", "Nombre de la carrera")],
    }
}

/// Declaration of `compararUniversidades`
pub fn compare_universities_spec() -> ToolSpec {
    ToolSpec {
        name: COMPARE_UNIVERSITIES,
        description: "Muestra lado a lado la información del PDF sobre dos universidades.",
        params: vec![
            ToolParam::new("universidad1", "Primera universidad"),
            ToolParam::new("universidad2", "Segunda universidad"),
        ],
    }
}

/// Declaration of `compararCarreras`
pub fn compare_careers_spec() -> ToolSpec {
    ToolSpec {
        name: COMPARE_CAREERS,
        description: "Muestra lado a lado la información del PDF sobre dos carreras.",
        params: vec![
            ToolParam::new("carrera1", "Primera carrera"),
            ToolParam::new("carrera2", "Segunda carrera"),
        ],
    }
}

fn detail(catalog: &Catalog, name: &str, subject: Subject) -> String {
    let name = name.trim();
    match catalog.detail(name) {
        Ok(Some(block)) => format!("Detalle de {}:\n{}", name, block),
        Ok(None) => format!("No se encontró información sobre {}: {}", subject.noun(), name),
        Err(e) => query_failed(name, &e),
    }
}

fn compare(catalog: &Catalog, first: &str, second: &str, subject: Subject) -> String {
    format!(
        "{}{}{}",
        detail(catalog, first, subject),
        COMPARISON_SEPARATOR,
        detail(catalog, second, subject)
    )
}

/// Handle `detalleUniversidad`
pub fn handle_university_detail(catalog: &Catalog, params: UniversityParams) -> String {
    detail(catalog, &params.university, Subject::University)
}

/// Handle `detalleCarrera`
pub fn handle_career_detail(catalog: &Catalog, params: CareerParams) -> String {
    detail(catalog, &params.career, Subject::Career)
}

/// Handle `compararUniversidades`
pub fn handle_compare_universities(catalog: &Catalog, params: UniversityPairParams) -> String {
    compare(catalog, &params.first, &params.second, Subject::University)
}

/// Handle `compararCarreras`
pub fn handle_compare_careers(catalog: &Catalog, params: CareerPairParams) -> String {
    compare(catalog, &params.first, &params.second, Subject::Career)
}
