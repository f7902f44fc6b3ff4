use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::components::{Modal, ModalInput, TextInput};
use crate::i18n::LocaleStore;
use crate::records::FieldKind;
use crate::ui::theme::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterOutcome {
    None,
    Closed,
    Invalid,
    Subscribed(String),
}

/// Sign-up dialog state; the modal itself is rebuilt from `open` each frame.
#[derive(Debug, Clone)]
pub struct Newsletter {
    open: bool,
    input: TextInput,
    invalid: bool,
}

impl Default for Newsletter {
    fn default() -> Self {
        Self {
            open: false,
            input: TextInput::new(FieldKind::SingleLine),
            invalid: false,
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty() && domain.contains('.') && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

impl Newsletter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.invalid = false;
        self.input.clear();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> NewsletterOutcome {
        let mut closed = false;
        let input = Modal::new(self.open, "")
            .size(50, 30)
            .on_close(|| closed = true)
            .handle_key(key);
        if closed {
            self.close();
            return NewsletterOutcome::Closed;
        }
        if input != ModalInput::Body {
            return NewsletterOutcome::None;
        }

        match key.code {
            KeyCode::Enter => {
                let email = self.input.value();
                if !looks_like_email(&email) {
                    self.invalid = true;
                    return NewsletterOutcome::Invalid;
                }
                self.close();
                return NewsletterOutcome::Subscribed(email.trim().to_string());
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_to_line_start(),
            KeyCode::End => self.input.move_to_line_end(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert_char(ch);
            }
            _ => return NewsletterOutcome::None,
        }
        self.invalid = false;
        NewsletterOutcome::None
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, frame: Rect) -> NewsletterOutcome {
        let mut closed = false;
        Modal::new(self.open, "")
            .size(50, 30)
            .on_close(|| closed = true)
            .handle_mouse(event, frame);
        if closed {
            self.close();
            return NewsletterOutcome::Closed;
        }
        NewsletterOutcome::None
    }

    pub fn render(&self, f: &mut Frame<'_>, frame: Rect, locale: &LocaleStore) {
        let title = locale.text("newsletter.title");
        let footer = if self.invalid {
            Line::from(Span::styled(
                locale.text("newsletter.invalid").into_owned(),
                Style::default().fg(FG_ERROR),
            ))
        } else {
            Line::from(locale.text("admin.view_hint").into_owned())
        };
        let placeholder = locale.text("newsletter.placeholder");
        Modal::new(self.open, &title)
            .size(50, 30)
            .footer(footer)
            .render(f, frame, |f, body| {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER_FOCUS))
                    .style(Style::default().bg(MENU_BG));
                let inner = block.inner(body);
                let content = if self.input.is_blank() {
                    Line::from(Span::styled(placeholder.as_ref(), Style::default().fg(FG_DIM)))
                } else {
                    Line::from(self.input.value())
                };
                f.render_widget(
                    Paragraph::new(content)
                        .block(block)
                        .style(Style::default().fg(MENU_TEXT).bg(MENU_BG)),
                    body,
                );
                if inner.width > 0 && inner.height > 0 {
                    let x = inner
                        .x
                        .saturating_add(self.input.cursor_display_column())
                        .min(inner.x + inner.width - 1);
                    f.set_cursor(x, inner.y);
                }
            });
    }
}
