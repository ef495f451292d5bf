mod app;
mod charts;
mod color;
mod data;
mod state;
mod ui;
mod wordcloud;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use app::ExplorerApp;
use data::aggregate::{title_corpus, top_journals, year_histogram};
use eframe::egui;

/// Full source table (too large to ship; may be absent).
const SOURCE_FILE: &str = "metadata.csv";
/// Persisted subsample, written when the source is present.
const SUBSAMPLE_FILE: &str = "metadata_sample.csv";
/// Rendered chart files, overwritten on each run.
const YEAR_CHART_FILE: &str = "publications_by_year.png";
const JOURNAL_CHART_FILE: &str = "top_journals.png";
const WORDCLOUD_FILE: &str = "titles_wordcloud.png";

const SAMPLE_SIZE: usize = 50_000;
const SAMPLE_SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::init();

    // ---- Load (source + seeded subsample, or persisted fallback) ----
    let outcome = data::loader::load_or_sample(
        Path::new(SOURCE_FILE),
        Path::new(SUBSAMPLE_FILE),
        SAMPLE_SIZE,
        SAMPLE_SEED,
    )?;
    if outcome.is_fallback() {
        log::info!("Running from the persisted subsample");
    }

    // ---- Clean ----
    let cleaned = data::clean::clean(outcome.into_dataset());
    log::info!("{} papers after cleaning", cleaned.len());

    // ---- Aggregate + render static charts ----
    let histogram = year_histogram(&cleaned.papers);
    let journals = top_journals(&cleaned.papers, state::TOP_JOURNALS);
    let corpus = title_corpus(&cleaned.papers);

    charts::render_year_histogram(Path::new(YEAR_CHART_FILE), &histogram)?;
    charts::render_top_journals(Path::new(JOURNAL_CHART_FILE), &journals)?;
    wordcloud::render_wordcloud(Path::new(WORDCLOUD_FILE), &corpus)?;

    // ---- Interactive explorer ----
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "CORD-19 Data Explorer",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the word-cloud png.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ExplorerApp::new(
                cleaned,
                PathBuf::from(WORDCLOUD_FILE),
            )))
        }),
    );
    if let Err(e) = result {
        bail!("explorer failed: {e}");
    }
    Ok(())
}
