use crate::core::types::{DateKey, SlotLabel};
use crate::engine::SlotEngine;
use crate::ui::ansi::{FG_LIGHT_GRAY, STYLE_BOLD, STYLE_INVERSE, STYLE_RESET};
use terminal_size::{terminal_size, Width};

/// Render-time label lookup. Localized day/time text comes from the host's
/// translation collaborator; the default is the engine's own canonical
/// forms. Labels never feed back into selection or availability identity.
pub trait LabelFormatter {
    fn day_label(&self, date: &DateKey) -> String;
    fn slot_label(&self, slot: &SlotLabel) -> String;
}

/// Canonical English labels.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLabels;

impl LabelFormatter for DefaultLabels {
    fn day_label(&self, date: &DateKey) -> String {
        use crate::extensions::chrono::WeekdayExt;
        use chrono::Datelike;
        date.0.weekday().short_label().to_string()
    }

    fn slot_label(&self, slot: &SlotLabel) -> String {
        slot.to_string()
    }
}

const GUTTER: usize = 2;
const FALLBACK_WIDTH: usize = 100;

/// Text snapshot of the widget surface: year label, paging affordances,
/// one column per visible date with its slot buttons, active date and slot
/// marked. Columns that don't fit the width limit are elided from the
/// right; the highlight state itself is unaffected.
pub fn render(
    engine: &SlotEngine,
    labels: &dyn LabelFormatter,
    use_ansi: bool,
    width: Option<usize>,
) -> String {
    let columns = engine.columns();

    let headers: Vec<String> = columns
        .iter()
        .map(|col| format!("{} {}", labels.day_label(&col.date), col.day_number))
        .collect();
    let slot_rows: usize = columns.iter().map(|c| c.slots.len()).max().unwrap_or(0);

    // Uniform column width from the widest unstyled cell, plus marker room.
    let mut col_width = headers.iter().map(String::len).max().unwrap_or(0);
    for col in &columns {
        for cell in &col.slots {
            col_width = col_width.max(labels.slot_label(&cell.label).len());
        }
    }
    col_width += 2;

    let limit = width
        .or_else(|| terminal_size().map(|(Width(w), _)| w as usize))
        .unwrap_or(FALLBACK_WIDTH);
    let per_column = col_width + GUTTER;
    let shown = (limit / per_column).clamp(1, columns.len().max(1));

    let mut lines = Vec::with_capacity(slot_rows + 3);
    lines.push(engine.year_label());
    lines.push(paging_line(shown * per_column, use_ansi));

    let header_line = columns
        .iter()
        .take(shown)
        .zip(&headers)
        .map(|(col, header)| {
            styled_cell(header, col.active, col_width, use_ansi, STYLE_BOLD)
        })
        .collect::<Vec<_>>()
        .join(&" ".repeat(GUTTER));
    lines.push(header_line);

    for row in 0..slot_rows {
        let line = columns
            .iter()
            .take(shown)
            .map(|col| match col.slots.get(row) {
                Some(cell) => styled_cell(
                    &labels.slot_label(&cell.label),
                    cell.active,
                    col_width,
                    use_ansi,
                    STYLE_INVERSE,
                ),
                None => " ".repeat(col_width),
            })
            .collect::<Vec<_>>()
            .join(&" ".repeat(GUTTER));
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn paging_line(total_width: usize, use_ansi: bool) -> String {
    let inner = total_width.saturating_sub("< prev".len() + "next >".len());
    let line = format!("< prev{}next >", " ".repeat(inner));
    if use_ansi {
        format!("{FG_LIGHT_GRAY}{line}{STYLE_RESET}")
    } else {
        line
    }
}

fn styled_cell(text: &str, active: bool, width: usize, use_ansi: bool, style: &str) -> String {
    if !active {
        return format!(" {:<w$}", text, w = width.saturating_sub(1));
    }
    if use_ansi {
        let padded = format!(" {:<w$}", text, w = width.saturating_sub(1));
        format!("{style}{padded}{STYLE_RESET}")
    } else {
        format!("[{:<w$}", format!("{text}]"), w = width.saturating_sub(1))
    }
}
