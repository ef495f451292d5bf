use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::color::generate_palette;

// ---------------------------------------------------------------------------
// Weighted word cloud of paper titles
// ---------------------------------------------------------------------------

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 400;
const MARGIN: i32 = 10;
const MIN_FONT: f64 = 14.0;
const MAX_FONT: f64 = 56.0;
const MAX_WORDS: usize = 60;

/// Common English words excluded from the cloud.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "are", "was", "were", "has", "have",
    "this", "that", "these", "those", "its", "their", "our", "your", "his",
    "her", "can", "may", "not", "but", "into", "over", "under", "during",
    "between", "among", "after", "before", "about", "against", "through",
    "who", "what", "when", "where", "how", "why", "which", "while", "than",
    "then", "them", "they", "using", "use", "used", "via", "per", "within",
];

/// Tokenize the corpus and return the `limit` most frequent words,
/// descending by count, alphabetical on ties (deterministic).
///
/// Tokens are lowercased, stripped of surrounding punctuation, and dropped
/// when shorter than three characters, purely numeric, or a stop word.
pub fn top_words(corpus: &str, limit: usize) -> Vec<(String, u32)> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in corpus.split_whitespace() {
        let word = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.chars().count() < 3
            || word.chars().all(|c| c.is_ascii_digit())
            || STOP_WORDS.contains(&word.as_str())
        {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Render a weighted word cloud of the title corpus to a PNG.
///
/// Words are scaled linearly between [`MIN_FONT`] and [`MAX_FONT`] by
/// frequency and packed greedily into rows, biggest first. The layout is
/// deterministic for a given corpus.
pub fn render_wordcloud(path: &Path, corpus: &str) -> Result<()> {
    let words = top_words(corpus, MAX_WORDS);

    let root = BitMapBackend::new(path, (CANVAS_WIDTH, CANVAS_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    if words.is_empty() {
        log::warn!("empty title corpus; wrote blank word cloud to {}", path.display());
        root.present()?;
        return Ok(());
    }

    let max = words[0].1 as f64;
    let min = words[words.len() - 1].1 as f64;
    let span = (max - min).max(1.0);
    let colors = generate_palette(words.len());

    let mut x = MARGIN;
    let mut y = MARGIN;
    let mut row_height = 0i32;

    for (i, (word, count)) in words.iter().enumerate() {
        let size = MIN_FONT + (MAX_FONT - MIN_FONT) * ((*count as f64 - min) / span);
        // Rough glyph-width estimate; good enough for row packing.
        let width = (0.58 * size * word.chars().count() as f64).ceil() as i32;
        let height = size.ceil() as i32;

        if x > MARGIN && x + width > CANVAS_WIDTH as i32 - MARGIN {
            x = MARGIN;
            y += row_height + 8;
            row_height = 0;
        }
        if y + height > CANVAS_HEIGHT as i32 - MARGIN {
            break; // canvas full, drop the remaining (smallest) words
        }

        let (r, g, b) = colors[i];
        root.draw(&Text::new(
            word.clone(),
            (x, y),
            ("sans-serif", size)
                .into_font()
                .color(&RGBColor(r, g, b)),
        ))?;

        x += width + 12;
        row_height = row_height.max(height);
    }

    root.present()?;
    log::info!("Saved word cloud to {}", path.display());
    Ok(())
}
