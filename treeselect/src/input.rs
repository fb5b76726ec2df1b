//! The search field shown at the top of the open overlay.

use crate::event::{Key, Modifiers};

/// Result of handling a key in the search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Cursor moved, text unchanged.
    Handled,
    /// Key not used by the field.
    Ignored,
}

/// Single-line text with a character-indexed cursor.
///
/// Arrow keys are left to the tree, so cursor movement uses the emacs
/// bindings (`Ctrl+A`, `Ctrl+E`).
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    text: String,
    /// Cursor position in characters.
    cursor: usize,
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

    /// Returns true if there was text to clear.
    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.cursor = 0;
        changed
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char('u') if modifiers.ctrl => edit(self.delete_to_start()),
            Key::Char('w') if modifiers.ctrl => edit(self.delete_word_back()),
            Key::Char('a') if modifiers.ctrl => {
                self.cursor = 0;
                TextEditResult::Handled
            }
            Key::Char('e') if modifiers.ctrl => {
                self.cursor = self.text.chars().count();
                TextEditResult::Handled
            }
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt && !c.is_control() => {
                self.insert_char(c);
                TextEditResult::Changed
            }
            Key::Backspace if !modifiers.ctrl => edit(self.delete_back()),
            Key::Backspace => edit(self.delete_word_back()),
            Key::Delete if modifiers.none() => edit(self.delete_forward()),
            _ => TextEditResult::Ignored,
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    fn delete_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let end = self.byte_index(self.cursor);
        self.text.replace_range(..end, "");
        self.cursor = 0;
        true
    }

    /// Delete trailing whitespace then the word before the cursor.
    fn delete_word_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let chars: Vec<char> = self.text.chars().take(self.cursor).collect();
        let mut start = chars.len();
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.text.replace_range(from..to, "");
        self.cursor = start;
        true
    }
}

fn edit(changed: bool) -> TextEditResult {
    if changed {
        TextEditResult::Changed
    } else {
        TextEditResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut SearchInput, s: &str) {
        for c in s.chars() {
            input.handle_key(Key::Char(c), Modifiers::default());
        }
    }

    #[test]
    fn typing_and_backspace() {
        let mut input = SearchInput::new();
        type_str(&mut input, "réact");
        assert_eq!(input.text(), "réact");
        assert_eq!(
            input.handle_key(Key::Backspace, Modifiers::default()),
            TextEditResult::Changed
        );
        assert_eq!(input.text(), "réac");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn backspace_on_empty_is_handled_without_change() {
        let mut input = SearchInput::new();
        assert_eq!(
            input.handle_key(Key::Backspace, Modifiers::default()),
            TextEditResult::Handled
        );
    }

    #[test]
    fn ctrl_w_deletes_previous_word() {
        let mut input = SearchInput::new();
        type_str(&mut input, "spring boot ");
        input.handle_key(Key::Char('w'), Modifiers::ctrl());
        assert_eq!(input.text(), "spring ");
    }

    #[test]
    fn ctrl_u_clears_before_cursor() {
        let mut input = SearchInput::new();
        type_str(&mut input, "vue");
        input.handle_key(Key::Char('a'), Modifiers::ctrl());
        assert_eq!(
            input.handle_key(Key::Char('u'), Modifiers::ctrl()),
            TextEditResult::Handled
        );
        input.handle_key(Key::Char('e'), Modifiers::ctrl());
        input.handle_key(Key::Char('u'), Modifiers::ctrl());
        assert!(input.is_empty());
    }
}
