use eframe::egui::{self, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::palette_color32;
use crate::state::{AppState, PREVIEW_ROWS};

// ---------------------------------------------------------------------------
// Central panel – summary charts, word cloud, row preview
// ---------------------------------------------------------------------------

/// Render the central panel: both per-selection charts, the precomputed
/// word-cloud image, and a preview of the first filtered rows.
pub fn summary_panel(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No papers in the loaded sample");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Publications Over Time");
            year_chart(ui, state);
            ui.separator();

            ui.heading("Top Journals");
            journal_chart(ui, state);
            ui.separator();

            ui.heading("Word Cloud of Titles");
            ui.add(
                egui::Image::from_uri(format!(
                    "file://{}",
                    state.wordcloud_path.display()
                ))
                .max_width(ui.available_width().min(800.0)),
            );
            ui.separator();

            ui.heading("Sample of the Data");
            preview_table(ui, state);
        });
}

fn year_chart(ui: &mut Ui, state: &AppState) {
    let bars: Vec<Bar> = state
        .histogram
        .iter()
        .map(|&(year, count)| Bar::new(year as f64, count as f64).width(0.9))
        .collect();

    Plot::new("year_histogram")
        .height(220.0)
        .x_axis_label("Year")
        .y_axis_label("Publications")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("publications"));
        });
}

fn journal_chart(ui: &mut Ui, state: &AppState) {
    let colors = palette_color32(state.top_journals.len());
    let bars: Vec<Bar> = state
        .top_journals
        .iter()
        .enumerate()
        .map(|(i, (journal, count))| {
            Bar::new(i as f64, *count as f64)
                .width(0.8)
                .name(journal)
                .fill(colors[i])
        })
        .collect();

    Plot::new("top_journals")
        .height(220.0)
        .y_axis_label("Papers")
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("journals"));
        });

    // Ranked legend; journal names are too long for axis ticks.
    egui::Grid::new("journal_legend").striped(true).show(ui, |ui: &mut Ui| {
        for (i, (journal, count)) in state.top_journals.iter().enumerate() {
            ui.colored_label(colors[i], format!("{}.", i + 1));
            ui.label(journal);
            ui.label(count.to_string());
            ui.end_row();
        }
    });
}

fn preview_table(ui: &mut Ui, state: &AppState) {
    egui::Grid::new("row_preview")
        .striped(true)
        .min_col_width(60.0)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Title");
            ui.strong("Year");
            ui.strong("Journal");
            ui.strong("Abstract words");
            ui.end_row();

            for &idx in state.visible_indices.iter().take(PREVIEW_ROWS) {
                let paper = &state.dataset.papers[idx];
                ui.label(clip(paper.title.as_deref().unwrap_or(""), 80));
                ui.label(
                    paper
                        .year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "—".to_string()),
                );
                ui.label(paper.journal.as_deref().unwrap_or("—"));
                ui.label(paper.abstract_word_count.to_string());
                ui.end_row();
            }
        });
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
