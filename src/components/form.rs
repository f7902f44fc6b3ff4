use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::rect_contains;
use super::text_input::TextInput;
use crate::records::{FieldDescriptor, FieldKind, Record};
use crate::ui::theme::*;

/// In-progress create/edit snapshot.
///
/// Holds a draft copy of the record plus one input per field descriptor.
/// Keystrokes only ever touch the draft; the source collection is written
/// when the owner confirms.
#[derive(Debug, Clone)]
pub struct FormState<R> {
    draft: R,
    fields: Vec<FieldDescriptor>,
    inputs: Vec<TextInput>,
    focused: usize,
    pub error: Option<String>,
}

impl<R: Record> FormState<R> {
    pub fn new(draft: R, fields: &[FieldDescriptor]) -> Self {
        let inputs = fields
            .iter()
            .map(|field| TextInput::with_value(field.kind, draft.field(field.field).unwrap_or("")))
            .collect();
        Self {
            draft,
            fields: fields.to_vec(),
            inputs,
            focused: 0,
            error: None,
        }
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    pub fn into_draft(self) -> R {
        self.draft
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.inputs.len() {
            self.focused = index;
        }
    }

    pub fn focus_next(&mut self) {
        if !self.inputs.is_empty() {
            self.focused = (self.focused + 1) % self.inputs.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.inputs.is_empty() {
            self.focused = (self.focused + self.inputs.len() - 1) % self.inputs.len();
        }
    }

    /// Label of the first required field left blank, if any.
    pub fn missing_required(&self) -> Option<&'static str> {
        self.fields
            .iter()
            .zip(&self.inputs)
            .find(|(field, input)| field.required && input.is_blank())
            .map(|(field, _)| field.label)
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let Some(input) = self.inputs.get_mut(self.focused) else {
            return;
        };
        edit(input);
        let value = input.value();
        let name = self.fields[self.focused].field;
        self.draft.set_field(name, value);
        self.error = None;
    }

    /// Applies an editing key to the focused input. Returns whether it was used.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Up => self.focus_previous(),
            KeyCode::Down => self.focus_next(),
            KeyCode::Enter => {
                let multi_line = self
                    .fields
                    .get(self.focused)
                    .is_some_and(|field| field.kind == FieldKind::MultiLine);
                if multi_line {
                    self.edit_focused(|input| {
                        input.insert_newline();
                    });
                } else {
                    self.focus_next();
                }
            }
            KeyCode::Backspace => self.edit_focused(TextInput::backspace),
            KeyCode::Delete => self.edit_focused(TextInput::delete),
            KeyCode::Left => self.edit_focused(TextInput::move_left),
            KeyCode::Right => self.edit_focused(TextInput::move_right),
            KeyCode::Home => self.edit_focused(TextInput::move_to_line_start),
            KeyCode::End => self.edit_focused(TextInput::move_to_line_end),
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT)
                {
                    return false;
                }
                self.edit_focused(|input| input.insert_char(ch));
            }
            _ => return false,
        }
        true
    }

    /// Field index whose input box contains the given cell, using the same
    /// stacking as `render`.
    pub fn field_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        self.field_areas(area)
            .iter()
            .position(|rect| rect_contains(rect, column, row))
    }

    fn field_areas(&self, area: Rect) -> Vec<Rect> {
        let mut constraints: Vec<Constraint> = self
            .fields
            .iter()
            .map(|field| Constraint::Length(field.kind.height()))
            .collect();
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);
        chunks[..self.fields.len()].to_vec()
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let chunks = self.field_areas(area);
        for (idx, ((field, input), rect)) in self
            .fields
            .iter()
            .zip(&self.inputs)
            .zip(chunks.iter())
            .enumerate()
        {
            if rect.height == 0 {
                continue;
            }
            let focused = idx == self.focused;
            let border = if focused { BORDER_FOCUS } else { BORDER_IDLE };
            let title = if field.required {
                format!("{} *", field.label)
            } else {
                field.label.to_string()
            };
            let block = Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(MENU_BG));
            let inner = block.inner(*rect);
            let lines: Vec<Line> = input.display_lines().into_iter().map(Line::from).collect();
            let (cursor_line, _) = input.cursor();
            let scroll = cursor_line.saturating_sub(inner.height.saturating_sub(1) as usize);
            let paragraph = Paragraph::new(lines)
                .block(block)
                .scroll((scroll.min(u16::MAX as usize) as u16, 0))
                .style(Style::default().fg(MENU_TEXT).bg(MENU_BG));
            f.render_widget(paragraph, *rect);

            if focused && inner.width > 0 && inner.height > 0 {
                let x = inner
                    .x
                    .saturating_add(input.cursor_display_column())
                    .min(inner.x + inner.width - 1);
                let y = inner
                    .y
                    .saturating_add((cursor_line - scroll).min(u16::MAX as usize) as u16)
                    .min(inner.y + inner.height - 1);
                f.set_cursor(x, y);
            }
        }
    }
}
