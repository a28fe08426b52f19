//! TextField: a single-line text control bound to caller state.
//!
//! Cursor position is per-instance view state, tracked as a byte offset and
//! kept char-boundary safe; the text itself lives in the caller's binding.

use std::any::Any;

use crate::compose::binding::Binding;
use crate::compose::fragment::Fragment;

/// A text field reading and writing a `Binding<String>`.
pub struct TextField {
    label: String,
    value: Binding<String>,
    placeholder: String,
    cursor: usize,
}

impl TextField {
    /// Create a text field with the given label, bound to `value`. The
    /// cursor starts at the end of the current text.
    pub fn new(label: impl Into<String>, value: Binding<String>) -> Self {
        let cursor = value.with(String::len);
        Self {
            label: label.into(),
            value,
            placeholder: String::new(),
            cursor,
        }
    }

    /// Set the placeholder text (builder).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// A clone of the current text.
    pub fn text(&self) -> String {
        self.value.get()
    }

    /// Replace the text, moving the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.cursor = text.len();
        self.value.set(text);
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let cursor = self.cursor;
        self.value.update(|text| text.insert(cursor, ch));
        self.cursor += ch.len_utf8();
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_char_boundary();
        let cursor = self.cursor;
        self.value.update(|text| {
            text.drain(prev..cursor);
        });
        self.cursor = prev;
    }

    /// Move the cursor left by one character.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_boundary();
        }
    }

    /// Move the cursor right by one character.
    pub fn move_cursor_right(&mut self) {
        let len = self.value.with(String::len);
        if self.cursor < len {
            self.cursor = self.next_char_boundary();
        }
    }

    /// The cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset of the previous character boundary.
    fn prev_char_boundary(&self) -> usize {
        self.value.with(|text| {
            let mut pos = self.cursor.saturating_sub(1);
            while pos > 0 && !text.is_char_boundary(pos) {
                pos -= 1;
            }
            pos
        })
    }

    /// Byte offset of the next character boundary.
    fn next_char_boundary(&self) -> usize {
        self.value.with(|text| {
            let mut pos = (self.cursor + 1).min(text.len());
            while pos < text.len() && !text.is_char_boundary(pos) {
                pos += 1;
            }
            pos
        })
    }
}

impl Fragment for TextField {
    fn fragment_type(&self) -> &str {
        "TextField"
    }

    fn render_line(&self) -> String {
        let text = self.text();
        if text.is_empty() && !self.placeholder.is_empty() {
            format!("{}: ({})", self.label, self.placeholder)
        } else {
            format!("{}: {text}", self.label)
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_text_or_placeholder() {
        let field =
            TextField::new("Hostname", Binding::new(String::new())).with_placeholder("my-laptop");
        assert_eq!(field.render_line(), "Hostname: (my-laptop)");

        let field = TextField::new("Hostname", Binding::new("atlas".to_owned()));
        assert_eq!(field.render_line(), "Hostname: atlas");
    }

    #[test]
    fn insert_and_delete() {
        let value = Binding::new(String::new());
        let mut field = TextField::new("Name", value.clone());
        field.insert_char('h');
        field.insert_char('i');
        assert_eq!(value.get(), "hi");
        field.delete_char();
        assert_eq!(value.get(), "h");
    }

    #[test]
    fn delete_at_start_is_noop() {
        let mut field = TextField::new("Name", Binding::new(String::new()));
        field.delete_char();
        assert_eq!(field.text(), "");
    }

    #[test]
    fn cursor_movement_is_char_boundary_safe() {
        let value = Binding::new("aé".to_owned());
        let mut field = TextField::new("Name", value);
        assert_eq!(field.cursor(), 3); // starts at end (é is 2 bytes)
        field.move_cursor_left();
        assert_eq!(field.cursor(), 1);
        field.move_cursor_left();
        assert_eq!(field.cursor(), 0);
        field.move_cursor_left();
        assert_eq!(field.cursor(), 0);
        field.move_cursor_right();
        assert_eq!(field.cursor(), 1);
        field.move_cursor_right();
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn edits_land_in_the_shared_binding() {
        let value = Binding::new("a".to_owned());
        let mut one = TextField::new("N", value.clone());
        let two = TextField::new("N", value);
        one.insert_char('b');
        assert_eq!(two.text(), "ab");
        // Each instance keeps its own cursor.
        assert_eq!(one.cursor(), 2);
        assert_eq!(two.cursor(), 1);
    }

    #[test]
    fn set_text_moves_cursor_to_end() {
        let mut field = TextField::new("N", Binding::new(String::new()));
        field.set_text("hello");
        assert_eq!(field.cursor(), 5);
        assert_eq!(field.text(), "hello");
    }
}
