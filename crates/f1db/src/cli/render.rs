//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text. Every function returns a `String`
//! so output can be tested without capturing stdout; handlers do the printing.
//!
//! ## Table Layout
//!
//! The list view has one row per record:
//! - `index` (right-aligned to the widest index): store index, the number every
//!   other command expects
//! - `label` (fill): record label, truncated to fit `LINE_WIDTH`
//!
//! Widths are measured with `unicode-width`, so accented driver names line up.

use colored::Colorize;
use f1dbapp::commands::{CmdMessage, DatasetInfo, MessageLevel};
use f1dbapp::form::FormField;
use f1dbapp::views::{DatasetSummary, ListedRecord};
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

pub fn render_list(records: &[ListedRecord], summary: Option<&DatasetSummary>) -> String {
    let mut out = String::new();
    let index_width = records
        .iter()
        .map(|r| r.index.to_string().len())
        .max()
        .unwrap_or(1);

    for listed in records {
        let idx = format!("{:>width$}. ", listed.index, width = index_width);
        let available = LINE_WIDTH.saturating_sub(idx.width() + 2);
        let _ = writeln!(
            out,
            "  {}{}",
            idx.yellow(),
            truncate_to_width(&listed.label, available)
        );
    }

    if let Some(summary) = summary {
        if !records.is_empty() {
            out.push('\n');
        }
        let line = format!(
            "{} record(s) · {}: {}",
            summary.total,
            summary.metric.label(),
            summary.metric.value()
        );
        let _ = writeln!(out, "{}", line.dimmed());
    }
    out
}

pub fn render_record(listed: &ListedRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        format!("{}.", listed.index).yellow(),
        listed.label.bold()
    );
    let _ = writeln!(out, "--------------------------------");
    let body = serde_json::to_string_pretty(&listed.record).unwrap_or_default();
    let _ = writeln!(out, "{}", body);
    out
}

pub fn render_form(fields: &[FormField]) -> String {
    let mut out = String::new();
    let label_width = fields.iter().map(|f| f.label.width()).max().unwrap_or(0);

    for field in fields {
        let padding = " ".repeat(label_width.saturating_sub(field.label.width()));
        let kind = format!("{:?}", field.kind).to_lowercase();
        let mut value = field.value.to_string();
        if !field.choices.is_empty() {
            value = format!("{}  [{}]", value, field.choices.join("|"));
        }
        if let Some(step) = field.step {
            value = format!("{}  (step {})", value, step);
        }
        let label = if field.required {
            field.label.bold()
        } else {
            field.label.normal()
        };
        let _ = writeln!(
            out,
            "  {}{}  {:<8} {}",
            label,
            padding,
            kind.dimmed(),
            value
        );
    }
    out
}

pub fn render_datasets(datasets: &[DatasetInfo]) -> String {
    let mut out = String::new();
    let name_width = datasets
        .iter()
        .map(|d| d.display_name.width())
        .max()
        .unwrap_or(0);

    for info in datasets {
        let padding = " ".repeat(name_width.saturating_sub(info.display_name.width()));
        let count = match info.records {
            Some(n) => format!("{:>6}", n),
            None => format!("{:>6}", "?").red().to_string(),
        };
        let _ = writeln!(
            out,
            "  {}{}  {}  {}",
            info.display_name.bold(),
            padding,
            count,
            info.path.display().to_string().dimmed()
        );
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
