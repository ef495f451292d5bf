/// Data layer: core types, loading, cleaning, filtering and aggregation.
///
/// Architecture:
/// ```text
///  metadata.csv ──────────┐
///  metadata_sample.csv ───┤ (fallback)
///                         ▼
///                   ┌──────────┐
///                   │  loader   │  read CSV, seeded 50k subsample → PaperSet
///                   └──────────┘
///                         │
///                         ▼
///                   ┌──────────┐
///                   │  clean    │  drop incomplete rows, derive year + word count
///                   └──────────┘
///                         │
///                         ▼
///                   ┌──────────┐    ┌──────────┐
///                   │  filter   │───▶│ aggregate │  histogram, top journals, corpus
///                   └──────────┘    └──────────┘
/// ```
pub mod aggregate;
pub mod clean;
pub mod filter;
pub mod loader;
pub mod model;
