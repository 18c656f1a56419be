//! Quick Pick Handling
//!
//! Items offered by single-select prompts and the matching of typed
//! answers against them.

use tracing::debug;

/// An item offered by a single-select prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickPickItem {
    /// Stable identifier returned to the caller
    pub id: String,
    /// Text shown to the user
    pub label: String,
}

impl QuickPickItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Options for a single-select prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickPickOptions {
    pub title: String,
}

/// Result of matching an answer against the items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    /// Index of the chosen item
    Selected(usize),
    /// User dismissed the prompt
    Cancelled,
    /// Input not recognized
    NotRecognized,
}

/// Words that dismiss a prompt
const CANCEL_WORDS: [&str; 5] = ["cancel", "q", "quit", "exit", "esc"];

/// Whether `answer` dismisses the prompt
pub fn is_cancel_word(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    CANCEL_WORDS.contains(&answer.as_str())
}

/// Match a typed answer: a 1-based number, an item id or an item label
pub fn parse_pick(answer: &str, items: &[QuickPickItem]) -> PickResult {
    if is_cancel_word(answer) {
        debug!("Quick pick: cancelled");
        return PickResult::Cancelled;
    }

    let answer = answer.trim().to_lowercase();

    if let Ok(n) = answer.parse::<usize>() {
        if (1..=items.len()).contains(&n) {
            return PickResult::Selected(n - 1);
        }
        return PickResult::NotRecognized;
    }

    items
        .iter()
        .position(|item| item.id.to_lowercase() == answer || item.label.to_lowercase() == answer)
        .map_or(PickResult::NotRecognized, PickResult::Selected)
}

/// Numbered listing of the items, one per line
pub fn render_items(items: &[QuickPickItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {}", i + 1, item.label))
        .collect::<Vec<_>>()
        .join("\n")
}
