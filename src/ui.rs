// src/ui.rs

use crate::content_item::ContentItem;
use crate::view_simulator::ViewBurst;
use chrono::{DateTime, Local};
use serde::Serialize;

/// One line per item. With `show_views`, the play count follows the label.
pub fn format_items(items: &[ContentItem], show_views: bool) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            if show_views {
                format!("{} {}", item, item.plays())
            } else {
                item.display_label()
            }
        })
        .collect()
}

pub fn display_items(items: &[ContentItem], show_views: bool) {
    for line in format_items(items, show_views) {
        println!("{}", line);
    }
}

pub fn display_separator(length: usize) {
    println!("{}", "-".repeat(length));
}

/// Header line, e.g. "Movie Library 14.10.2026".
pub fn format_header(now: DateTime<Local>, date_format: &str) -> String {
    format!("Movie Library {}", now.format(date_format))
}

/// Numbered ranking starting at 1.
pub fn format_ranking(items: &[ContentItem]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}

pub fn display_ranking(items: &[ContentItem]) {
    for line in format_ranking(items) {
        println!("{}", line);
    }
}

pub fn display_bursts(bursts: &[ViewBurst]) {
    for burst in bursts {
        println!("+{:>3} {}", burst.plays_added, burst.title);
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Local>,
    sorted_by_views: &'a [ContentItem],
    top_titles: &'a [ContentItem],
}

/// Machine-readable snapshot of the ranked catalog.
pub fn display_json(
    now: DateTime<Local>,
    sorted_by_views: &[ContentItem],
    top_titles: &[ContentItem],
) -> Result<(), serde_json::Error> {
    let report = JsonReport {
        generated_at: now,
        sorted_by_views,
        top_titles,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
