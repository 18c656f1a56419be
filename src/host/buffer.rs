//! In-memory Text Buffer
//!
//! The document used by the terminal host: file contents plus a selection.

use super::editor::{Position, Selection, TextEdit, TextEditor};
use crate::error::{HipsumError, HipsumResult};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    selection: Selection,
}

impl TextBuffer {
    /// Buffer with the caret at the end of `text`
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = position_at(&text, text.len());
        Self {
            text,
            selection: Selection::caret(end),
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Byte offset of `position`, clamped to the line and to the document
    pub fn offset_of(&self, position: Position) -> usize {
        offset_of(&self.text, position)
    }

    pub fn position_at(&self, offset: usize) -> Position {
        position_at(&self.text, offset)
    }
}

impl TextEditor for TextBuffer {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn apply_edits(&mut self, edits: Vec<TextEdit>) -> HipsumResult<()> {
        if edits.is_empty() {
            return Ok(());
        }

        let mut ranges: Vec<(usize, usize, &str)> = edits
            .iter()
            .map(|edit| {
                (
                    self.offset_of(edit.range.start()),
                    self.offset_of(edit.range.end()),
                    edit.new_text.as_str(),
                )
            })
            .collect();
        ranges.sort_by_key(|&(start, end, _)| (start, end));

        if let Some(pair) = ranges.windows(2).find(|pair| pair[0].1 > pair[1].0) {
            return Err(HipsumError::Selection(format!(
                "overlapping edits at bytes {}..{} and {}..{}",
                pair[0].0, pair[0].1, pair[1].0, pair[1].1
            )));
        }

        let mut text = String::with_capacity(self.text.len());
        let mut cursor = 0;
        for &(start, end, new_text) in &ranges {
            text.push_str(&self.text[cursor..start]);
            text.push_str(new_text);
            cursor = end;
        }
        text.push_str(&self.text[cursor..]);
        let caret = text.len() - (self.text.len() - cursor);

        debug!(
            "Applied {} edit(s), {} -> {} bytes",
            ranges.len(),
            self.text.len(),
            text.len()
        );
        self.text = text;
        self.selection = Selection::caret(self.position_at(caret));
        Ok(())
    }
}

fn offset_of(text: &str, position: Position) -> usize {
    let mut line_start = 0;
    for _ in 0..position.line {
        match text[line_start..].find('\n') {
            Some(i) => line_start += i + 1,
            None => return text.len(),
        }
    }

    let line_end = text[line_start..]
        .find('\n')
        .map_or(text.len(), |i| line_start + i);
    let line = text[line_start..line_end].trim_end_matches('\r');

    line.char_indices()
        .nth(position.character)
        .map_or(line_start + line.len(), |(i, _)| line_start + i)
}

fn position_at(text: &str, offset: usize) -> Position {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    Position::new(
        before.matches('\n').count(),
        before[line_start..].chars().count(),
    )
}
