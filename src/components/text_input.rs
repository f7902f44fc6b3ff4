use ropey::Rope;
use unicode_width::UnicodeWidthChar;

use crate::records::FieldKind;

/// Editable text buffer with a character cursor.
///
/// Single-line inputs drop newlines on the way in; multi-line inputs keep
/// them and track the cursor as (line, column).
#[derive(Debug, Clone)]
pub struct TextInput {
    buffer: Rope,
    cursor: usize,
    kind: FieldKind,
    masked: bool,
}

impl TextInput {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            buffer: Rope::new(),
            cursor: 0,
            kind,
            masked: false,
        }
    }

    pub fn with_value(kind: FieldKind, value: &str) -> Self {
        let mut input = Self::new(kind);
        input.set_value(value);
        input
    }

    /// Renders every character as `*`, for password fields.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn set_value(&mut self, value: &str) {
        let text = match self.kind {
            FieldKind::SingleLine => value.replace(['\r', '\n'], " "),
            FieldKind::MultiLine => value.replace('\r', ""),
        };
        self.buffer = Rope::from_str(&text);
        self.cursor = self.buffer.len_chars();
    }

    pub fn value(&self) -> String {
        self.buffer.to_string()
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.chars().all(char::is_whitespace)
    }

    pub fn clear(&mut self) {
        self.buffer = Rope::new();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\r' {
            return;
        }
        if ch == '\n' && self.kind == FieldKind::SingleLine {
            return;
        }
        self.buffer.insert_char(self.cursor, ch);
        self.cursor += 1;
    }

    /// Inserts a line break. Returns `false` for single-line inputs.
    pub fn insert_newline(&mut self) -> bool {
        if self.kind == FieldKind::SingleLine {
            return false;
        }
        self.insert_char('\n');
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.buffer.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.buffer.len_chars() {
            return;
        }
        self.buffer.remove(self.cursor..self.cursor + 1);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.len_chars());
    }

    pub fn move_to_line_start(&mut self) {
        let line = self.buffer.char_to_line(self.cursor);
        self.cursor = self.buffer.line_to_char(line);
    }

    pub fn move_to_line_end(&mut self) {
        let line = self.buffer.char_to_line(self.cursor);
        let start = self.buffer.line_to_char(line);
        self.cursor = start + self.line_length_without_newline(line);
    }

    fn line_length_without_newline(&self, line: usize) -> usize {
        let slice = self.buffer.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Cursor position as (line, char column).
    pub fn cursor(&self) -> (usize, usize) {
        let line = self.buffer.char_to_line(self.cursor);
        (line, self.cursor - self.buffer.line_to_char(line))
    }

    /// Display lines, masked if requested, without trailing newlines.
    pub fn display_lines(&self) -> Vec<String> {
        (0..self.buffer.len_lines())
            .map(|idx| {
                let line: String = self
                    .buffer
                    .line(idx)
                    .chars()
                    .filter(|ch| *ch != '\n')
                    .collect();
                if self.masked {
                    "*".repeat(line.chars().count())
                } else {
                    line
                }
            })
            .collect()
    }

    /// Terminal cell offset of the cursor within its line.
    pub fn cursor_display_column(&self) -> u16 {
        let (line, col) = self.cursor();
        if self.masked {
            return col.min(u16::MAX as usize) as u16;
        }
        let width: usize = self
            .buffer
            .line(line)
            .chars()
            .take(col)
            .map(|ch| ch.width().unwrap_or(0))
            .sum();
        width.min(u16::MAX as usize) as u16
    }
}
