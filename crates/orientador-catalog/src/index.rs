//! Text-to-index extraction
//!
//! Lines are scanned for `Universidad:` and `Carrera:` markers. A marker's value
//! runs until the next marker on the same line (or the end of the line), so
//! `Universidad: UBA Carrera: Medicina` yields the university `UBA` and the
//! career `Medicina`. Universities and careers found on the same line are linked
//! in both directions.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(universidad|carrera)\s*:").expect("marker pattern is valid")
});

/// Characters stripped from both ends of a marker value
const SEPARATORS: &[char] = &[',', ';', '|', '·'];

/// Insertion-ordered, duplicate-free mapping from a name to related names
#[derive(Debug, Clone, Default)]
pub struct Associations {
    entries: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl Associations {
    /// Register a name, returning its position
    fn register(&mut self, name: &str) -> usize {
        if let Some(&pos) = self.positions.get(name) {
            return pos;
        }
        self.entries.push((name.to_string(), Vec::new()));
        self.positions.insert(name.to_string(), self.entries.len() - 1);
        self.entries.len() - 1
    }

    /// Link `related` to `name`, registering `name` if needed
    fn link(&mut self, name: &str, related: &str) {
        let pos = self.register(name);
        let list = &mut self.entries[pos].1;
        if !list.iter().any(|r| r == related) {
            list.push(related.to_string());
        }
    }

    /// Related names for an exact name
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.positions
            .get(name)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    /// Whether the exact name is known
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// All names in the order they first appeared
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Names whose lowercase form contains the lowercase keyword
    pub fn search(&self, keyword: &str) -> Vec<&str> {
        let needle = keyword.to_lowercase();
        self.names()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no names are known
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of links
    pub fn link_count(&self) -> usize {
        self.entries.iter().map(|(_, related)| related.len()).sum()
    }
}

/// University and career lookup tables built from the document text
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    /// University name → careers offered
    pub universities: Associations,

    /// Career name → universities offering it
    pub careers: Associations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    University,
    Career,
}

impl CatalogIndex {
    /// Build the index from the full document text
    pub fn from_text(text: &str) -> Self {
        let mut index = Self::default();
        for line in text.lines() {
            index.ingest_line(line);
        }
        index
    }

    fn ingest_line(&mut self, line: &str) {
        let mut universities = Vec::new();
        let mut careers = Vec::new();

        for (kind, value) in marker_values(line) {
            match kind {
                MarkerKind::University => {
                    self.universities.register(value);
                    universities.push(value);
                }
                MarkerKind::Career => {
                    self.careers.register(value);
                    careers.push(value);
                }
            }
        }

        for university in &universities {
            for career in &careers {
                self.universities.link(university, career);
                self.careers.link(career, university);
            }
        }
    }
}

/// Values of every marker on a line, in order of appearance
fn marker_values(line: &str) -> Vec<(MarkerKind, &str)> {
    let markers: Vec<_> = MARKER.find_iter(line).collect();
    let mut values = Vec::with_capacity(markers.len());

    for (i, marker) in markers.iter().enumerate() {
        let kind = if marker.as_str().to_lowercase().starts_with('u') {
            MarkerKind::University
        } else {
            MarkerKind::Career
        };
        let end = markers.get(i + 1).map_or(line.len(), |next| next.start());
        let value = line[marker.end()..end]
            .trim_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c));
        if !value.is_empty() {
            values.push((kind, value));
        }
    }

    values
}
