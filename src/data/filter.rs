use super::model::PaperSet;

// ---------------------------------------------------------------------------
// Year-range filtering
// ---------------------------------------------------------------------------

/// An inclusive year range selected in the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub lo: i32,
    pub hi: i32,
}

impl YearRange {
    /// Build a range, swapping the endpoints if they arrive out of order.
    pub fn new(lo: i32, hi: i32) -> Self {
        if lo <= hi {
            YearRange { lo, hi }
        } else {
            YearRange { lo: hi, hi: lo }
        }
    }

    /// Clamp both endpoints into the dataset's year bounds.
    pub fn clamp_to(self, bounds: (i32, i32)) -> Self {
        let (min, max) = bounds;
        YearRange::new(self.lo.clamp(min, max), self.hi.clamp(min, max))
    }

    pub fn contains(&self, year: i32) -> bool {
        self.lo <= year && year <= self.hi
    }
}

/// Return indices of papers whose derived year lies within the range.
///
/// Papers with a null year never match a range filter.
pub fn indices_in_range(set: &PaperSet, range: YearRange) -> Vec<usize> {
    set.papers
        .iter()
        .enumerate()
        .filter(|(_, p)| p.year.is_some_and(|y| range.contains(y)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Paper;

    fn paper(year: Option<i32>) -> Paper {
        Paper {
            title: Some("t".into()),
            publish_time: Some("x".into()),
            year,
            ..Paper::default()
        }
    }

    #[test]
    fn range_is_inclusive_and_skips_null_years() {
        let set = PaperSet::new(vec![
            paper(Some(2019)),
            paper(Some(2020)),
            paper(Some(2021)),
            paper(Some(2022)),
            paper(None),
            paper(Some(2023)),
        ]);
        let indices = indices_in_range(&set, YearRange::new(2020, 2022));
        assert_eq!(indices, vec![1, 2, 3]);
        for &i in &indices {
            let y = set.papers[i].year.unwrap();
            assert!((2020..=2022).contains(&y));
        }
    }

    #[test]
    fn reversed_endpoints_are_swapped() {
        assert_eq!(YearRange::new(2022, 2020), YearRange::new(2020, 2022));
    }

    #[test]
    fn clamp_narrows_to_bounds() {
        let clamped = YearRange::new(2020, 2022).clamp_to((2021, 2021));
        assert_eq!(clamped, YearRange::new(2021, 2021));
    }
}
