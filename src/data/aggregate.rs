use std::collections::{BTreeMap, HashMap};

use super::model::Paper;

// ---------------------------------------------------------------------------
// Aggregations over a (possibly filtered) set of papers
// ---------------------------------------------------------------------------
//
// Each summary is independent so the explorer can recompute only the first
// two over a filtered subset. All functions take an iterator of borrowed
// papers; callers pass either the whole dataset or an index view.

/// Count of papers per distinct non-null year, ascending by year.
pub fn year_histogram<'a, I>(papers: I) -> Vec<(i32, u64)>
where
    I: IntoIterator<Item = &'a Paper>,
{
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for year in papers.into_iter().filter_map(|p| p.year) {
        *counts.entry(year).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// The `n` most frequent non-null journals, descending by count.
///
/// Ties are broken by first-encountered order, so the ranking is stable for
/// a given row order. Counting is independent of year validity.
pub fn top_journals<'a, I>(papers: I, n: usize) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = &'a Paper>,
{
    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
    let mut order = 0usize;
    for journal in papers.into_iter().filter_map(|p| p.journal.as_deref()) {
        let entry = counts.entry(journal).or_insert_with(|| {
            order += 1;
            (0, order)
        });
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, (u64, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.truncate(n);
    ranked
        .into_iter()
        .map(|(journal, (count, _))| (journal.to_string(), count))
        .collect()
}

/// All non-null titles joined with single spaces, feeding the word-cloud
/// renderer. No deduplication.
pub fn title_corpus<'a, I>(papers: I) -> String
where
    I: IntoIterator<Item = &'a Paper>,
{
    papers
        .into_iter()
        .filter_map(|p| p.title.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Paper, PaperSet};

    fn paper(title: &str, year: Option<i32>, journal: Option<&str>) -> Paper {
        Paper {
            title: Some(title.to_string()),
            publish_time: Some("x".into()),
            journal: journal.map(String::from),
            year,
            ..Paper::default()
        }
    }

    fn sample_set() -> PaperSet {
        PaperSet::new(vec![
            paper("alpha", Some(2020), Some("J1")),
            paper("beta", Some(2020), Some("J2")),
            paper("gamma", Some(2021), Some("J1")),
            paper("delta", None, Some("J3")),
            paper("epsilon", Some(2019), None),
        ])
    }

    #[test]
    fn histogram_is_sorted_and_counts_only_non_null_years() {
        let set = sample_set();
        let hist = year_histogram(&set.papers);
        assert_eq!(hist, vec![(2019, 1), (2020, 2), (2021, 1)]);

        let with_year = set.papers.iter().filter(|p| p.year.is_some()).count() as u64;
        let total: u64 = hist.iter().map(|&(_, c)| c).sum();
        assert_eq!(total, with_year);
    }

    #[test]
    fn top_journals_ranks_by_count_with_stable_ties() {
        let set = sample_set();
        let top = top_journals(&set.papers, 10);
        // J1 twice; J2 and J3 tie at one, J2 seen first.
        assert_eq!(
            top,
            vec![
                ("J1".to_string(), 2),
                ("J2".to_string(), 1),
                ("J3".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_journals_counts_rows_with_null_year() {
        // J3 only appears on the row with an unparseable date.
        let top = top_journals(&sample_set().papers, 10);
        assert!(top.iter().any(|(j, c)| j == "J3" && *c == 1));
    }

    #[test]
    fn top_journals_truncates_and_dominates_excluded() {
        let mut papers = Vec::new();
        for i in 0..15 {
            for _ in 0..=i {
                papers.push(paper("t", Some(2020), Some(&format!("J{i:02}"))));
            }
        }
        let top = top_journals(&papers, 10);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
        // Every excluded journal has frequency <= the smallest included one.
        let floor = top.last().unwrap().1;
        assert!(floor >= 6, "least frequent of top 10 out of 15 ramps");
    }

    #[test]
    fn corpus_joins_titles_without_dedup() {
        let set = PaperSet::new(vec![
            paper("covid research", Some(2020), None),
            paper("covid research", Some(2021), None),
        ]);
        assert_eq!(title_corpus(&set.papers), "covid research covid research");
    }
}
