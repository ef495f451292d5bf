use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::color::generate_palette;

// ---------------------------------------------------------------------------
// Static chart rendering (PNG, fixed names, overwritten per run)
// ---------------------------------------------------------------------------

/// Bar chart of publications per year.
pub fn render_year_histogram(path: &Path, histogram: &[(i32, u64)]) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    if histogram.is_empty() {
        log::warn!("year histogram is empty; wrote blank chart to {}", path.display());
        root.present()?;
        return Ok(());
    }

    let min_year = histogram[0].0;
    let max_year = histogram[histogram.len() - 1].0;
    let max_count = histogram.iter().map(|&(_, c)| c).max().unwrap_or(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption("Publications by Year", ("sans-serif", 28.0))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(min_year..max_year + 1, 0.0..max_count * 1.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Year")
        .y_desc("Number of Publications")
        .draw()?;

    chart.draw_series(histogram.iter().map(|&(year, count)| {
        Rectangle::new([(year, 0.0), (year + 1, count as f64)], BLUE.filled())
    }))?;

    root.present()?;
    log::info!("Saved year histogram to {}", path.display());
    Ok(())
}

/// Bar chart of the most frequent journals, with rotated x labels.
pub fn render_top_journals(path: &Path, top: &[(String, u64)]) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    if top.is_empty() {
        log::warn!("no journals to plot; wrote blank chart to {}", path.display());
        root.present()?;
        return Ok(());
    }

    let n = top.len() as i32;
    let max_count = top.iter().map(|&(_, c)| c).max().unwrap_or(1) as f64;
    let labels: Vec<String> = top.iter().map(|(name, _)| truncate(name, 24)).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Top Journals", ("sans-serif", 28.0))
        .margin(10)
        .x_label_area_size(170)
        .y_label_area_size(60)
        .build_cartesian_2d(0..n, 0.0..max_count * 1.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(top.len())
        .x_label_formatter(&|x| {
            labels
                .get(*x as usize)
                .cloned()
                .unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", 14.0)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc("Number of Papers")
        .draw()?;

    let colors = generate_palette(top.len());
    chart.draw_series(top.iter().enumerate().map(|(i, (_, count))| {
        let (r, g, b) = colors[i];
        Rectangle::new(
            [(i as i32, 0.0), (i as i32 + 1, *count as f64)],
            RGBColor(r, g, b).filled(),
        )
    }))?;

    root.present()?;
    log::info!("Saved top-journals chart to {}", path.display());
    Ok(())
}

fn truncate(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let head: String = name.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
