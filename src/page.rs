//! In-memory page document the view controller renders into.
//!
//! Each container is owned by exactly one renderer, which replaces its whole
//! content on every render. Front ends only read the page, except for the
//! search input which the user types into.

use crate::models::MovieId;
use std::fmt;

/// The three movie lists on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    SearchResults,
    Catalog,
    Similar,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [Self::SearchResults, Self::Catalog, Self::Similar];

    pub fn label(self) -> &'static str {
        match self {
            Self::SearchResults => "Wyniki wyszukiwania",
            Self::Catalog => "Wszystkie filmy",
            Self::Similar => "Podobne filmy",
        }
    }

    /// Text of the placeholder row shown when the list has no movies.
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::SearchResults => "Brak wyników",
            Self::Catalog => "Brak filmów w katalogu.",
            Self::Similar => "Brak podobnych filmów.",
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Self::SearchResults => 0,
            Self::Catalog => 1,
            Self::Similar => 2,
        }
    }
}

/// A single list entry. Rows with a target are clickable and open that movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub target: Option<MovieId>,
}

impl Row {
    pub fn link(text: impl Into<String>, target: MovieId) -> Self {
        Self {
            text: text.into(),
            target: Some(target),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: None,
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.target.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    rows: Vec<Row>,
}

impl ListView {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn texts(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.text.as_str()).collect()
    }
}

/// The movie card: title, subtitle and the three credit lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPanel {
    pub visible: bool,
    pub title: String,
    pub subtitle: String,
    pub actors: ListView,
    pub directors: ListView,
    pub genres: ListView,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub search_input: String,
    pub search_results: ListView,
    pub catalog: ListView,
    pub similar: ListView,
    pub details: DetailPanel,
    /// Wrapper around the card and the similar list; opened on first click.
    pub details_wrapper_visible: bool,
}

impl Page {
    pub fn list(&self, kind: ListKind) -> &ListView {
        match kind {
            ListKind::SearchResults => &self.search_results,
            ListKind::Catalog => &self.catalog,
            ListKind::Similar => &self.similar,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in [ListKind::SearchResults, ListKind::Catalog] {
            write_list(f, kind.label(), self.list(kind))?;
        }
        if !self.details_wrapper_visible {
            return Ok(());
        }
        if self.details.visible {
            writeln!(f, "== {} ==", self.details.title)?;
            if !self.details.subtitle.is_empty() {
                writeln!(f, "{}", self.details.subtitle)?;
            }
            write_list(f, "Aktorzy", &self.details.actors)?;
            write_list(f, "Reżyserzy", &self.details.directors)?;
            write_list(f, "Gatunki", &self.details.genres)?;
        }
        write_list(f, ListKind::Similar.label(), &self.similar)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, label: &str, list: &ListView) -> fmt::Result {
    writeln!(f, "[{label}]")?;
    for row in list.rows() {
        match &row.target {
            Some(id) => writeln!(f, "  #{id} {}", row.text)?,
            None => writeln!(f, "  {}", row.text)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_skips_hidden_details() {
        let mut page = Page::default();
        page.catalog.push(Row::link("Alien (1979)", MovieId::Number(1)));
        let text = page.to_string();
        assert!(text.contains("[Wszystkie filmy]\n  #1 Alien (1979)\n"));
        assert!(!text.contains("Podobne filmy"));
    }

    #[test]
    fn display_includes_card_when_open() {
        let mut page = Page::default();
        page.details_wrapper_visible = true;
        page.details.visible = true;
        page.details.title = "Alien".to_string();
        page.details.genres.push(Row::plain("Horror"));
        page.similar.push(Row::plain("Brak podobnych filmów."));
        let text = page.to_string();
        assert!(text.contains("== Alien ==\n"));
        assert!(text.contains("[Gatunki]\n  Horror\n"));
        assert!(text.contains("[Podobne filmy]\n  Brak podobnych filmów.\n"));
    }
}
