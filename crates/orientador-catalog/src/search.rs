//! Literal block and proximity search over the raw document text
//!
//! Names coming from users or from the model are always escaped before they are
//! compiled, so `Universidad (UBA)` matches those exact characters.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Compiled size cap for patterns built from user input
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Discipline stems that mark a line as naming a career
static CAREER_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:",
        r"ingenier[ií]a|licenciatura|medicina|abogac[ií]a|derecho|contador|",
        r"arquitectura|psicolog[ií]a|tecnicatura|profesorado|dise[ñn]o|administraci[óo]n|",
        r"econom[ií]a|sistemas|enfermer[ií]a|odontolog[ií]a|veterinaria|nutrici[óo]n|",
        r"comunicaci[óo]n|periodismo|filosof[ií]a|historia|letras|matem[áa]tica|",
        r"f[ií]sica|qu[ií]mica|biolog[ií]a|sociolog[ií]a|ciencias|inform[áa]tica|",
        r"programaci[óo]n|kinesiolog[ií]a|farmacia|agronom[ií]a|turismo|relaciones|",
        r"marketing|traductorado|m[úu]sica|artes|educaci[óo]n",
        r")",
    ))
    .expect("career keyword pattern is valid")
});

/// Compile a case-insensitive pattern matching `needle` literally
pub fn literal_pattern(needle: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
}

/// A line whose very first character is uppercase
///
/// Indented lines never count, so indented content stays inside the block.
fn is_heading(line: &str) -> bool {
    line.chars().next().map_or(false, char::is_uppercase)
}

/// Byte offset of the `n`th char of `s`, or `s.len()` when shorter
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Block of text that starts at the first line containing `name`
///
/// The block runs up to the next heading-like line and is capped at
/// `max_chars` characters. Returns `None` when `name` is blank or absent.
pub fn find_block(text: &str, name: &str, max_chars: usize) -> Result<Option<String>, regex::Error> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }
    let pattern = literal_pattern(name)?;

    let mut lines = text.lines();
    let Some(first) = lines.by_ref().find(|line| pattern.is_match(line)) else {
        return Ok(None);
    };

    let mut block = vec![first.trim_end()];
    for line in lines {
        if is_heading(line) {
            break;
        }
        block.push(line.trim_end());
    }
    while block.last().map_or(false, |l| l.trim().is_empty()) {
        block.pop();
    }

    let joined = block.join("\n");
    Ok(Some(joined[..char_offset(&joined, max_chars)].to_string()))
}

/// Career-looking lines within `window_chars` characters after `name`
///
/// The window starts right after the first case-insensitive occurrence of
/// `name`. Lines are trimmed and returned once each, in order.
pub fn career_lines_after(text: &str, name: &str, window_chars: usize) -> Result<Vec<String>, regex::Error> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = literal_pattern(name)?;
    let Some(found) = pattern.find(text) else {
        return Ok(Vec::new());
    };

    let rest = &text[found.end()..];
    let window = &rest[..char_offset(rest, window_chars)];

    let mut lines: Vec<String> = Vec::new();
    for line in window.lines().map(str::trim) {
        if line.is_empty() || !CAREER_KEYWORDS.is_match(line) {
            continue;
        }
        if !lines.iter().any(|l| l == line) {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUIDE: &str = "\
Guía de Universidades de CABA
Universidad de Buenos Aires
  pública y gratuita, fundada en 1821.
  sede central en Viamonte 430.

Universidad (UBA) anexo
  ciclo básico común
Instituto Tecnológico
  privado.
";

    #[test]
    fn test_block_stops_at_next_heading() {
        let block = find_block(GUIDE, "Universidad de Buenos Aires", 2_000).unwrap().unwrap();
        assert!(block.starts_with("Universidad de Buenos Aires"));
        assert!(block.contains("fundada en 1821"));
        assert!(block.contains("Viamonte 430"));
        assert!(!block.contains("anexo"));
        assert!(!block.ends_with('\n'));
    }

    #[test]
    fn test_indented_capitalized_lines_stay_in_block() {
        let text = "\
Universidad del Salvador
  Sede Centro: Callao 801
  Medicina
  Psicología
Universidad de Morón
  Sede Morón
";
        let block = find_block(text, "Universidad del Salvador", 2_000).unwrap().unwrap();
        assert_eq!(
            block,
            "Universidad del Salvador\n  Sede Centro: Callao 801\n  Medicina\n  Psicología"
        );
    }

    #[test]
    fn test_marker_word_alone_is_not_a_career_line() {
        let text = "UBA\nCarrera: a definir\nCarrera: Medicina\n";
        assert_eq!(career_lines_after(text, "UBA", 1_000).unwrap(), vec!["Carrera: Medicina"]);
    }

    #[test]
    fn test_block_is_case_insensitive() {
        let block = find_block(GUIDE, "instituto tecnológico", 2_000).unwrap().unwrap();
        assert_eq!(block, "Instituto Tecnológico\n  privado.");
    }

    #[test]
    fn test_block_absent_name() {
        assert_eq!(find_block(GUIDE, "Universidad de Córdoba", 2_000).unwrap(), None);
        assert_eq!(find_block(GUIDE, "   ", 2_000).unwrap(), None);
    }

    #[test]
    fn test_block_metacharacters_are_literal() {
        let block = find_block(GUIDE, "Universidad (UBA)", 2_000).unwrap().unwrap();
        assert!(block.starts_with("Universidad (UBA) anexo"));

        // Would match everything (or fail to compile) if interpolated raw
        assert_eq!(find_block(GUIDE, ".*", 2_000).unwrap(), None);
        assert_eq!(find_block(GUIDE, "(unclosed", 2_000).unwrap(), None);
        assert_eq!(find_block(GUIDE, "[a-z]+", 2_000).unwrap(), None);
    }

    #[test]
    fn test_block_is_capped_on_char_boundary() {
        let text = "Ñandú ñandú ñandú\n";
        let block = find_block(text, "ñandú", 4).unwrap().unwrap();
        assert_eq!(block, "Ñand");
    }

    #[test]
    fn test_career_lines_after_name() {
        let text = "\
Universidad Tecnológica Nacional
  Ingeniería en Sistemas
  Ingeniería Civil
  horario nocturno
  Licenciatura en Administración
Universidad del Salvador
  Medicina
";
        let lines = career_lines_after(text, "Tecnológica Nacional", 1_000).unwrap();
        assert_eq!(
            lines,
            vec![
                "Ingeniería en Sistemas",
                "Ingeniería Civil",
                "Licenciatura en Administración",
                "Medicina",
            ]
        );
    }

    #[test]
    fn test_career_window_is_bounded() {
        let text = format!("Universidad X\n{}\nMedicina\n", "relleno ".repeat(200));
        assert!(career_lines_after(&text, "Universidad X", 100).unwrap().is_empty());
        assert_eq!(career_lines_after(&text, "Universidad X", 5_000).unwrap(), vec!["Medicina"]);
    }

    #[test]
    fn test_career_lines_deduplicated() {
        let text = "UBA\nMedicina\nMedicina\n  Medicina  \n";
        assert_eq!(career_lines_after(text, "UBA", 1_000).unwrap(), vec!["Medicina"]);
    }

    #[test]
    fn test_career_lines_absent_name() {
        assert!(career_lines_after("Medicina", "UBA", 1_000).unwrap().is_empty());
        assert!(career_lines_after("Medicina", "", 1_000).unwrap().is_empty());
    }

    #[test]
    fn test_heading_detection() {
        assert!(is_heading("Universidad"));
        assert!(is_heading("Ábaco"));
        assert!(!is_heading("   Ábaco"));
        assert!(!is_heading("  minúscula"));
        assert!(!is_heading(""));
        assert!(!is_heading("1. Introducción"));
    }
}
