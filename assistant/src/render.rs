//! Plain-text rendering of a [`ViewState`] for terminals.

use crate::models::*;
use crate::view::ViewState;
use std::fmt::Write;

pub const HISTORY_EMPTY: &str =
    "Questions and answers will appear here as you interact with the paper.";

pub const UPLOAD_HINT: &str = "Max ~20–30 pages recommended for best results.";

pub const EXAMPLE_QUESTIONS: [&str; 3] = [
    "What is the main contribution of this paper?",
    "Summarise the methodology in simple terms.",
    "What are the limitations and future work?",
];

/// One paragraph per line of the answer, as the service formats it.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// First eight characters of the id followed by an ellipsis.
pub fn short_id(document_id: &str) -> String {
    let prefix: String = document_id.chars().take(8).collect();
    format!("{}…", prefix)
}

pub fn document_card(doc: &DocumentInfo) -> String {
    format!(
        "Current document\n  {}\n  ID: {}  Chars: {}\n",
        doc.filename,
        short_id(&doc.document_id),
        doc.char_count
    )
}

pub fn answer_card(answer: &str) -> String {
    let mut out = String::from("Assistant\n");
    for line in paragraphs(answer) {
        let _ = writeln!(out, "  {}", line);
    }
    out
}

pub fn history(records: &[QaRecord]) -> String {
    let mut out = String::from("Conversation history\n");
    if records.is_empty() {
        let _ = writeln!(out, "  {}", HISTORY_EMPTY);
        return out;
    }

    for record in records {
        let _ = writeln!(out, "  [{}]", record.created_at.format("%H:%M:%S"));
        let _ = writeln!(out, "  You: {}", record.question);
        let mut lines = paragraphs(&record.answer).into_iter();
        let _ = writeln!(out, "  Assistant: {}", lines.next().unwrap_or_default());
        for line in lines {
            let _ = writeln!(out, "             {}", line);
        }
    }
    out
}

/// History section, or the empty-state message when nothing has been asked yet.
pub fn history_section(view: &ViewState) -> String {
    if view.shows_history() {
        history(&view.history)
    } else {
        history(&[])
    }
}

pub fn error_banner(error: &str) -> String {
    format!("! {}\n", error)
}

pub fn hints() -> String {
    let mut out = String::from("Try questions like:\n");
    for question in EXAMPLE_QUESTIONS {
        let _ = writeln!(out, "  • {}", question);
    }
    out
}

/// Sidebar-style summary: selection, busy labels, document card and error banner.
pub fn status(view: &ViewState) -> String {
    let mut out = String::new();
    match &view.selected_file {
        Some(name) => {
            let _ = writeln!(out, "File: {} [{}]", name, view.upload_label());
        }
        None if view.document.is_none() => {
            let _ = writeln!(out, "No file chosen. {}", UPLOAD_HINT);
        }
        None => {}
    }
    if !view.can_ask() {
        let _ = writeln!(out, "{}", view.ask_label());
    }
    if view.shows_document_card() {
        if let Some(doc) = &view.document {
            out.push_str(&document_card(doc));
        }
    }
    if let Some(error) = &view.error {
        out.push_str(&error_banner(error));
    }
    out
}
