//! Single-line search box editing.

use crate::event::{Key, Modifiers};

/// Text and cursor of the search box. The cursor is a char index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

/// Result of feeding a key to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
    /// Text was modified.
    Changed,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, placing the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    /// Empty the box. Returns true if there was text to clear.
    pub fn clear(&mut self) -> bool {
        self.cursor = 0;
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        true
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> SearchEdit {
        match key {
            Key::Char('u') if modifiers.ctrl => {
                if self.clear() {
                    SearchEdit::Changed
                } else {
                    SearchEdit::Handled
                }
            }
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt && !c.is_control() => {
                self.insert_char(c);
                SearchEdit::Changed
            }
            Key::Backspace => edited(self.delete_back()),
            Key::Delete => edited(self.delete_forward()),
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                SearchEdit::Handled
            }
            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                SearchEdit::Handled
            }
            Key::Home => {
                self.cursor = 0;
                SearchEdit::Handled
            }
            Key::End => {
                self.cursor = self.char_count();
                SearchEdit::Handled
            }
            _ => SearchEdit::Ignored,
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the char under the cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }
}

fn edited(changed: bool) -> SearchEdit {
    if changed {
        SearchEdit::Changed
    } else {
        SearchEdit::Handled
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
