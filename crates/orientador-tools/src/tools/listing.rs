//! Listings of everything the document names, and proximity scans

use orientador_catalog::Catalog;
use orientador_domain::{ToolParam, ToolSpec};

use super::lookup::{CareerParams, UniversityParams};
use super::{bullet_list, query_failed};

/// Tool name: all universities
pub const LIST_UNIVERSITIES: &str = "listarUniversidades";

/// Tool name: all careers
pub const LIST_CAREERS: &str = "listarCarreras";

/// Tool name: careers mentioned near a university
pub const CAREERS_NEAR_UNIVERSITY: &str = "listarCarrerasDeUniversidad";

/// Tool name: universities whose text mentions a career
pub const UNIVERSITIES_WITH_CAREER: &str = "listarUniversidadesDeCarrera";

/// Declaration of `listarUniversidades`
pub fn list_universities_spec() -> ToolSpec {
    ToolSpec {
        name: LIST_UNIVERSITIES,
        description: "Lista todas las universidades encontradas en el PDF.",
        params: Vec::new(),
    }
}

/// Declaration of `listarCarreras`
pub fn list_careers_spec() -> ToolSpec {
    ToolSpec {
        name: LIST_CAREERS,
        description: "Lista todas las carreras encontradas en el PDF.",
        params: Vec::new(),
    }
}

/// Declaration of `listarCarrerasDeUniversidad`
pub fn careers_near_university_spec() -> ToolSpec {
    ToolSpec {
        name: CAREERS_NEAR_UNIVERSITY,
        description: "Lista las carreras que el PDF menciona en la sección de una universidad.",
        params: vec![ToolParam::new("universidad", "Nombre de la universidad tal como aparece en el PDF")],
    }
}

/// Declaration of `listarUniversidadesDeCarrera`
pub fn universities_with_career_spec() -> ToolSpec {
    ToolSpec {
        name: UNIVERSITIES_WITH_CAREER,
        description: "Lista las universidades cuya sección del PDF menciona una carrera.",
        params: vec![ToolParam::new("carrera", "Nombre o parte del nombre de la carrera")],
    }
}

/// Handle `listarUniversidades`
pub fn handle_list_universities(catalog: &Catalog) -> String {
    let universities = catalog.universities();
    if universities.is_empty() {
        return "No se encontraron universidades.".to_string();
    }
    bullet_list("Universidades:", &universities)
}

/// Handle `listarCarreras`
pub fn handle_list_careers(catalog: &Catalog) -> String {
    let careers = catalog.careers();
    if careers.is_empty() {
        return "No se encontraron carreras.".to_string();
    }
    bullet_list("Carreras:", &careers)
}

/// Handle `listarCarrerasDeUniversidad`
pub fn handle_careers_near_university(catalog: &Catalog, params: UniversityParams) -> String {
    let university = params.university.trim();
    match catalog.careers_near(university) {
        Ok(lines) if !lines.is_empty() => {
            bullet_list(&format!("Carreras mencionadas para {}:", university), &lines)
        }
        Ok(_) => format!("No se encontraron carreras para la universidad: {}", university),
        Err(e) => query_failed(university, &e),
    }
}

/// Handle `listarUniversidadesDeCarrera`
pub fn handle_universities_with_career(catalog: &Catalog, params: CareerParams) -> String {
    let career = params.career.trim();
    match catalog.universities_offering(career) {
        Ok(universities) if !universities.is_empty() => {
            bullet_list(&format!("Universidades que mencionan {}:", career), &universities)
        }
        Ok(_) => format!("No se encontraron universidades para la carrera: {}", career),
        Err(e) => query_failed(career, &e),
    }
}
