use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// A single edit applied to a [`TextField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Backspace,
    CursorLeft,
    CursorRight,
}

/// Value and cursor of one editable text field. Lives in a store; rendering
/// is done by [`FieldBox`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    /// Position of the cursor in characters, not bytes
    character_index: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field pre-filled with `value`, cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let character_index = value.chars().count();
        Self {
            value,
            character_index,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn apply(&mut self, edit: InputEdit) {
        match edit {
            InputEdit::Insert(c) => self.enter_char(c),
            InputEdit::Backspace => self.delete_char(),
            InputEdit::CursorLeft => self.move_cursor_left(),
            InputEdit::CursorRight => self.move_cursor_right(),
        }
    }

    fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.character_index.saturating_sub(1);
        self.character_index = self.clamp_cursor(cursor_moved_left);
    }

    fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.character_index.saturating_add(1);
        self.character_index = self.clamp_cursor(cursor_moved_right);
    }

    fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.value.insert(index, new_char);
        self.move_cursor_right();
    }

    /// Byte index of the cursor. Characters can span several bytes so this
    /// can't be the character index itself.
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.character_index)
            .unwrap_or(self.value.len())
    }

    fn delete_char(&mut self) {
        if self.character_index == 0 {
            return;
        }
        // rebuild from chars: String::remove works on bytes
        let before = self.value.chars().take(self.character_index - 1);
        let after = self.value.chars().skip(self.character_index);
        self.value = before.chain(after).collect();
        self.move_cursor_left();
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.value.chars().count())
    }

    /// Terminal columns taken by the text left of the cursor
    fn cursor_column(&self, masked: bool) -> u16 {
        let width = if masked {
            self.character_index
        } else {
            self.value[..self.byte_index()].width()
        };
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

/// Bordered, titled render of a [`TextField`]
pub struct FieldBox<'a> {
    pub label: &'a str,
    pub field: &'a TextField,
    pub is_focused: bool,
    pub is_editing: bool,
    pub masked: bool,
}

impl FieldBox<'_> {
    /// Render the box and return where the terminal cursor belongs while editing
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Option<Position> {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::White
        };
        let text = if self.masked {
            "*".repeat(self.field.value().chars().count())
        } else {
            self.field.value().to_string()
        };
        let style = if self.is_focused && self.is_editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        Paragraph::new(text)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.label))
                    .border_style(Style::default().fg(border_color)),
            )
            .render(area, buf);

        if self.is_focused && self.is_editing {
            // +1 on both axes for the border
            Some(Position::new(
                area.x
                    .saturating_add(1)
                    .saturating_add(self.field.cursor_column(self.masked)),
                area.y.saturating_add(1),
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextField {
        let mut field = TextField::new();
        for c in s.chars() {
            field.apply(InputEdit::Insert(c));
        }
        field
    }

    #[test]
    fn test_typing_appends() {
        assert_eq!(typed("iris.csv").value(), "iris.csv");
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut field = typed("ac");
        field.apply(InputEdit::CursorLeft);
        field.apply(InputEdit::Insert('b'));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_backspace_handles_multibyte_chars() {
        let mut field = typed("café");
        field.apply(InputEdit::Backspace);
        assert_eq!(field.value(), "caf");
        field.apply(InputEdit::CursorLeft);
        field.apply(InputEdit::CursorLeft);
        field.apply(InputEdit::Backspace);
        assert_eq!(field.value(), "af");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = TextField::with_value("80");
        field.apply(InputEdit::CursorLeft);
        field.apply(InputEdit::CursorLeft);
        field.apply(InputEdit::CursorLeft);
        field.apply(InputEdit::Backspace);
        assert_eq!(field.value(), "80");
    }

    #[test]
    fn test_cursor_clamped_to_end() {
        let mut field = TextField::with_value("10");
        field.apply(InputEdit::CursorRight);
        field.apply(InputEdit::Insert('0'));
        assert_eq!(field.value(), "100");
    }

    #[test]
    fn test_cursor_position_only_while_editing() {
        let field = TextField::with_value("abc");
        let area = Rect::new(2, 4, 20, 3);
        let mut buf = Buffer::empty(area);
        let mut field_box = FieldBox {
            label: "Username",
            field: &field,
            is_focused: true,
            is_editing: false,
            masked: false,
        };
        assert_eq!(field_box.render(area, &mut buf), None);
        field_box.is_editing = true;
        assert_eq!(field_box.render(area, &mut buf), Some(Position::new(6, 5)));
    }
}
