//! Tool implementations
//!
//! Each tool has a `*_spec()` declaration, a parameter struct deserialized from
//! the call arguments, and a handler that turns a catalog query into text.

pub mod detail;
pub mod listing;
pub mod lookup;
pub mod search;

use orientador_catalog::CatalogError;
use orientador_domain::ToolSpec;

/// Visible delimiter between the two halves of a comparison
pub const COMPARISON_SEPARATOR: &str = "\n\n----------\n\n";

/// Declarations of every tool, in presentation order
pub fn all_specs() -> Vec<ToolSpec> {
    vec![
        lookup::university_careers_spec(),
        lookup::career_universities_spec(),
        listing::list_universities_spec(),
        listing::list_careers_spec(),
        search::search_universities_spec(),
        detail::university_detail_spec(),
        detail::compare_universities_spec(),
        search::search_careers_spec(),
        detail::career_detail_spec(),
        detail::compare_careers_spec(),
        listing::careers_near_university_spec(),
        listing::universities_with_career_spec(),
    ]
}

/// `header` followed by one `- item` line per item
pub(crate) fn bullet_list<S: AsRef<str>>(header: &str, items: &[S]) -> String {
    let mut out = String::from(header);
    for item in items {
        out.push_str("\n- ");
        out.push_str(item.as_ref());
    }
    out
}

/// Text shown when a query could not be run at all
pub(crate) fn query_failed(subject: &str, error: &CatalogError) -> String {
    format!("No se pudo consultar \"{}\": {}", subject, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_twelve_unique_tools() {
        let specs = all_specs();
        assert_eq!(specs.len(), 12);
        let names: HashSet<_> = specs.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_every_param_is_documented() {
        for spec in all_specs() {
            assert!(!spec.description.is_empty(), "{} has no description", spec.name);
            for param in &spec.params {
                assert!(!param.description.is_empty(), "{}.{}", spec.name, param.name);
            }
        }
    }

    #[test]
    fn test_bullet_list() {
        assert_eq!(bullet_list("Carreras:", &["Medicina", "Derecho"]), "Carreras:\n- Medicina\n- Derecho");
        assert_eq!(bullet_list::<&str>("Vacío:", &[]), "Vacío:");
    }
}
