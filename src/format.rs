//! Format chart rows, filter summaries, and tallies as terminal text.

use crate::filter::FilterCriteria;
use crate::tree::Grade;
use crate::views::{RowStyle, VisibleRow, ZoomLevel};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;

/// Indicator shown when a filter pass leaves nothing.
pub const NO_RESULTS: &str = "No results found";

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// One-line summary of the active filter inputs and zoom.
pub fn format_filter_summary(criteria: &FilterCriteria, zoom: ZoomLevel) -> String {
    let search = if criteria.search_active() {
        format!("\"{}\"", criteria.search_term)
    } else {
        "-".to_string()
    };
    format!(
        "Search: {}  Department: {}  Grade: {}  Zoom: {}%",
        search,
        criteria.department,
        criteria.grade,
        zoom.percent()
    )
}

/// Render visible rows as an indented tree.
pub fn format_rows(rows: &[VisibleRow], zoom: ZoomLevel, color: bool) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }
    let indent = zoom.indent_width();
    let mut out = String::new();
    for row in rows {
        out.push_str(&" ".repeat(row.depth * indent));
        out.push_str(&format_row(row, color));
        out.push('\n');
    }
    out
}

fn format_row(row: &VisibleRow, color: bool) -> String {
    let marker = match row.expanded {
        Some(true) => format!("\u{25be} ({})", row.report_count),
        Some(false) => format!("\u{25b8} ({})", row.report_count),
        None => "\u{2022}".to_string(),
    };
    let name = match (row.style, color) {
        (RowStyle::ExactMatch, true) => format!("{}", row.name.green().bold()),
        (RowStyle::Highlight, true) => format!("{}", row.name.yellow()),
        (RowStyle::ExactMatch, false) => format!("{} [match]", row.name),
        (RowStyle::Highlight, false) => format!("{} [name]", row.name),
        (RowStyle::Plain, _) => row.name.clone(),
    };

    let mut line = format!("{} {}", marker, name);
    if !row.position.is_empty() {
        line.push_str(&format!(" | {} - {}", row.position, row.department));
    } else {
        line.push_str(&format!(" | {}", row.department));
    }
    if let Some(grade) = row.grade {
        line.push_str(&format!(" | grade {}", grade));
    }
    if let Some(metrics) = &row.metrics {
        let mut parts = Vec::new();
        if let Some(rating) = metrics.rating {
            parts.push(format!("rating {}", rating));
        }
        if let Some(value) = &metrics.target_achievement {
            parts.push(format!("target {}", value));
        }
        if let Some(value) = &metrics.engagement_score {
            parts.push(format!("engagement {}", value));
        }
        if let Some(value) = &metrics.feedback {
            parts.push(format!("\"{}\"", value));
        }
        if !parts.is_empty() {
            line.push_str(&format!(" | {}", parts.join(", ")));
        }
    }
    line
}

/// Department tally as a table.
pub fn format_department_table(tally: &BTreeMap<String, usize>, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Departments", color)));
    if tally.is_empty() {
        out.push_str("No employees loaded.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Department", "Employees"]);
    for (department, count) in tally {
        table.add_row(vec![department.clone(), count.to_string()]);
    }
    out.push_str(&format!("{}\n\n", table));
    let total: usize = tally.values().sum();
    out.push_str(&format!(
        "Total: {} employees in {} departments.\n",
        total,
        tally.len()
    ));
    out
}

/// Grade bands as a table.
pub fn format_grade_table(color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Grades", color)));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Grade", "Rating band"]);
    for grade in Grade::ALL {
        table.add_row(vec![grade.to_string(), grade.band().to_string()]);
    }
    out.push_str(&format!("{}\n", table));
    out
}
