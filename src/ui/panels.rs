use eframe::egui::{self, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – year-range filter
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let (min_year, max_year) = state.year_bounds;
    let mut lo = state.year_range.lo;
    let mut hi = state.year_range.hi;

    ui.strong("Year range");
    let mut changed = false;
    changed |= ui
        .add(egui::Slider::new(&mut lo, min_year..=max_year).text("From"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut hi, min_year..=max_year).text("To"))
        .changed();
    if changed {
        state.set_year_range(lo, hi);
    }

    ui.add_space(8.0);
    ui.label(format!(
        "{} – {} selected",
        state.year_range.lo, state.year_range.hi
    ));
    ui.label(format!(
        "{} of {} papers in range",
        state.visible_indices.len(),
        state.dataset.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("CORD-19 Data Explorer");
        ui.separator();
        ui.label(format!(
            "Exploring COVID-19 research papers using a {}-row sample",
            state.dataset.len()
        ));
    });
}
