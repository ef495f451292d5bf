use std::path::PathBuf;

use crate::data::aggregate::{top_journals, year_histogram};
use crate::data::filter::{indices_in_range, YearRange};
use crate::data::model::PaperSet;

/// Default selection shown before the user touches the slider, clamped to
/// the dataset's actual year bounds.
const DEFAULT_RANGE: YearRange = YearRange { lo: 2020, hi: 2022 };

/// How many journals the explorer ranks.
pub const TOP_JOURNALS: usize = 10;

/// How many rows the preview table shows.
pub const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The cleaned dataset is held immutably; every interaction only rebuilds
/// the index view and the two summaries derived from it.
pub struct AppState {
    /// Cleaned dataset, read-only for the lifetime of the app.
    pub dataset: PaperSet,

    /// Dataset-wide min/max derived year (slider bounds).
    pub year_bounds: (i32, i32),

    /// Currently selected year range (inclusive).
    pub year_range: YearRange,

    /// Indices of papers inside the selected range (cached).
    pub visible_indices: Vec<usize>,

    /// Year histogram over the current selection.
    pub histogram: Vec<(i32, u64)>,

    /// Top journals over the current selection.
    pub top_journals: Vec<(String, u64)>,

    /// Path of the precomputed word-cloud image (never recomputed here).
    pub wordcloud_path: PathBuf,
}

impl AppState {
    pub fn new(dataset: PaperSet, wordcloud_path: PathBuf) -> Self {
        // A dataset where no date parsed at all still gets usable bounds.
        let year_bounds = dataset
            .year_bounds()
            .unwrap_or((DEFAULT_RANGE.lo, DEFAULT_RANGE.hi));

        let mut state = AppState {
            dataset,
            year_bounds,
            year_range: DEFAULT_RANGE.clamp_to(year_bounds),
            visible_indices: Vec::new(),
            histogram: Vec::new(),
            top_journals: Vec::new(),
            wordcloud_path,
        };
        state.refilter();
        state
    }

    /// Apply a new year selection and recompute the derived summaries.
    pub fn set_year_range(&mut self, lo: i32, hi: i32) {
        let range = YearRange::new(lo, hi).clamp_to(self.year_bounds);
        if range != self.year_range {
            self.year_range = range;
            self.refilter();
        }
    }

    /// Recompute `visible_indices` and the per-selection summaries.
    fn refilter(&mut self) {
        self.visible_indices = indices_in_range(&self.dataset, self.year_range);
        let visible = self
            .visible_indices
            .iter()
            .map(|&i| &self.dataset.papers[i]);
        self.histogram = year_histogram(visible.clone());
        self.top_journals = top_journals(visible, TOP_JOURNALS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Paper;

    fn paper(year: Option<i32>, journal: Option<&str>) -> Paper {
        Paper {
            title: Some("t".into()),
            publish_time: Some("x".into()),
            journal: journal.map(String::from),
            year,
            ..Paper::default()
        }
    }

    fn state() -> AppState {
        let set = PaperSet::new(vec![
            paper(Some(2018), Some("J1")),
            paper(Some(2020), Some("J1")),
            paper(Some(2021), Some("J2")),
            paper(Some(2022), Some("J1")),
            paper(None, Some("J3")),
        ]);
        AppState::new(set, PathBuf::from("titles_wordcloud.png"))
    }

    #[test]
    fn default_selection_is_2020_to_2022_clamped() {
        let s = state();
        assert_eq!(s.year_bounds, (2018, 2022));
        assert_eq!(s.year_range, YearRange::new(2020, 2022));
        assert_eq!(s.visible_indices, vec![1, 2, 3]);
    }

    #[test]
    fn filtered_histogram_total_matches_subset_size() {
        let mut s = state();
        s.set_year_range(2018, 2020);
        let total: u64 = s.histogram.iter().map(|&(_, c)| c).sum();
        assert_eq!(total as usize, s.visible_indices.len());
        assert_eq!(s.histogram, vec![(2018, 1), (2020, 1)]);
    }

    #[test]
    fn journal_summary_follows_the_selection() {
        let mut s = state();
        assert_eq!(s.top_journals[0], ("J1".to_string(), 2));
        s.set_year_range(2021, 2021);
        assert_eq!(s.top_journals, vec![("J2".to_string(), 1)]);
    }

    #[test]
    fn selection_is_clamped_into_bounds() {
        let mut s = state();
        s.set_year_range(1900, 3000);
        assert_eq!(s.year_range, YearRange::new(2018, 2022));
    }
}
