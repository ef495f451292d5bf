use chrono::{Datelike, NaiveDate};

use super::model::PaperSet;

// ---------------------------------------------------------------------------
// Cleaning: drop incomplete rows, derive year and abstract word count
// ---------------------------------------------------------------------------

/// Clean a freshly loaded dataset.
///
/// Rows lacking a title or a publish time are dropped. For every retained
/// row the derived fields are filled in: `year` from `publish_time` (left
/// `None` when the text does not parse) and `abstract_word_count` from the
/// abstract (0 when absent). Consumes the input and returns a new set.
pub fn clean(set: PaperSet) -> PaperSet {
    let papers = set
        .papers
        .into_iter()
        .filter(|p| p.has_required_fields())
        .map(|mut p| {
            p.year = p.publish_time.as_deref().and_then(parse_year);
            p.abstract_word_count = p
                .abstract_text
                .as_deref()
                .map_or(0, |a| a.split_whitespace().count() as u32);
            p
        })
        .collect();
    PaperSet::new(papers)
}

/// Extract the calendar year from a publish-time string.
///
/// The metadata mixes full dates (`2020-03-17`), year-months (`2020-03`) and
/// bare years (`2020`); all three are accepted. Anything else yields `None`.
fn parse_year(raw: &str) -> Option<i32> {
    let text = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.year());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d") {
        return Some(date.year());
    }
    if text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok();
    }
    None
}
