use serde::Deserialize;

// ---------------------------------------------------------------------------
// Paper – one row of the metadata table
// ---------------------------------------------------------------------------

/// A single research paper (one row of the source metadata CSV).
///
/// The raw fields mirror the CSV columns; the derived fields are filled in by
/// the cleaning step and are meaningless before it runs. Empty CSV cells
/// deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paper {
    /// Paper title. Required after cleaning.
    #[serde(default)]
    pub title: Option<String>,

    /// Raw publish date text, e.g. `"2020-03-17"`. Required after cleaning.
    #[serde(default)]
    pub publish_time: Option<String>,

    /// Journal name. Optional, categorical.
    #[serde(default)]
    pub journal: Option<String>,

    /// Paper abstract. Optional free text.
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,

    /// Publication year derived from `publish_time`. `None` when the date
    /// text could not be parsed (tolerated, not fatal).
    #[serde(skip)]
    pub year: Option<i32>,

    /// Whitespace-token count of the abstract; 0 when the abstract is absent.
    #[serde(skip)]
    pub abstract_word_count: u32,
}

impl Paper {
    /// Whether both required fields carry a non-blank value.
    pub fn has_required_fields(&self) -> bool {
        fn present(v: &Option<String>) -> bool {
            v.as_deref().is_some_and(|s| !s.trim().is_empty())
        }
        present(&self.title) && present(&self.publish_time)
    }
}

// ---------------------------------------------------------------------------
// PaperSet – the complete in-memory dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Read-only after cleaning; the explorer only
/// builds index views over it and never mutates the rows.
#[derive(Debug, Clone, Default)]
pub struct PaperSet {
    /// All papers (rows). Row position is the only identity.
    pub papers: Vec<Paper>,
}

impl PaperSet {
    pub fn new(papers: Vec<Paper>) -> Self {
        PaperSet { papers }
    }

    /// Number of papers.
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Minimum and maximum derived year, ignoring rows without one.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut bounds: Option<(i32, i32)> = None;
        for year in self.papers.iter().filter_map(|p| p.year) {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(year), hi.max(year)),
                None => (year, year),
            });
        }
        bounds
    }
}
