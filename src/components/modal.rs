//! Scoped overlay over caller-owned open/closed state.
//!
//! A `Modal` is rebuilt from the caller's flag every frame and every input
//! event. It keeps nothing between calls: when the flag is false it draws
//! nothing and lets every event through, and the only way it changes the
//! caller's state is by invoking the close callback.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::{centered_rect, rect_contains};
use crate::ui::theme::*;

const CLOSE_LABEL: &str = "[x]";

/// What the modal did with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalInput {
    /// The modal is closed; the event belongs to the page below.
    Passthrough,
    /// The close callback ran.
    Closed,
    /// The event landed inside the panel and should go to the body content.
    Body,
}

pub struct Modal<'a> {
    open: bool,
    title: &'a str,
    footer: Option<Text<'a>>,
    width_percent: u16,
    height_percent: u16,
    on_close: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> Modal<'a> {
    pub fn new(open: bool, title: &'a str) -> Self {
        Self {
            open,
            title,
            footer: None,
            width_percent: 70,
            height_percent: 80,
            on_close: None,
        }
    }

    pub fn footer(mut self, footer: impl Into<Text<'a>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn size(mut self, width_percent: u16, height_percent: u16) -> Self {
        self.width_percent = width_percent.min(100);
        self.height_percent = height_percent.min(100);
        self
    }

    pub fn on_close(mut self, on_close: impl FnMut() + 'a) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Panel rectangle inside the frame `area`.
    pub fn panel_area(&self, area: Rect) -> Rect {
        centered_rect(self.width_percent, self.height_percent, area)
    }

    /// Cells occupied by the close affordance on the panel's top border.
    pub fn close_area(&self, area: Rect) -> Rect {
        let panel = self.panel_area(area);
        let width = CLOSE_LABEL.len() as u16;
        Rect {
            x: panel.x + panel.width.saturating_sub(width + 1),
            y: panel.y,
            width: width.min(panel.width),
            height: panel.height.min(1),
        }
    }

    fn close(&mut self) -> ModalInput {
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
        ModalInput::Closed
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ModalInput {
        if !self.open {
            return ModalInput::Passthrough;
        }
        match key.code {
            KeyCode::Esc => self.close(),
            _ => ModalInput::Body,
        }
    }

    /// Routes a mouse event given the full frame `area` the modal covers.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) -> ModalInput {
        if !self.open {
            return ModalInput::Passthrough;
        }
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return ModalInput::Body;
        }
        if rect_contains(&self.close_area(area), event.column, event.row) {
            return self.close();
        }
        if !rect_contains(&self.panel_area(area), event.column, event.row) {
            return self.close();
        }
        ModalInput::Body
    }

    /// Draws the overlay and panel, then hands the body rectangle to `body`.
    /// Draws nothing at all while closed.
    pub fn render(self, f: &mut Frame<'_>, area: Rect, body: impl FnOnce(&mut Frame<'_>, Rect)) {
        if !self.open {
            return;
        }
        f.buffer_mut().set_style(
            area,
            Style::default().fg(FG_DIM).bg(BG_PRIMARY).add_modifier(Modifier::DIM),
        );

        let panel = self.panel_area(area);
        f.render_widget(Clear, panel);
        let block = Block::default()
            .title(Span::styled(
                self.title,
                Style::default().fg(BAR_TEXT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MENU_BORDER))
            .style(Style::default().bg(MENU_BG));
        let inner = block.inner(panel);
        f.render_widget(block, panel);

        let close_area = self.close_area(area);
        f.render_widget(
            Paragraph::new(CLOSE_LABEL).style(Style::default().fg(BAR_TEXT).bg(MENU_BG)),
            close_area,
        );

        let (body_area, footer_area) = match self.footer.as_ref() {
            Some(footer) => {
                let footer_height = (footer.height() as u16).clamp(1, 3);
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(1), Constraint::Length(footer_height)])
                    .split(inner);
                (chunks[0], Some(chunks[1]))
            }
            None => (inner, None),
        };

        body(f, body_area);

        if let (Some(footer), Some(footer_area)) = (self.footer, footer_area) {
            let footer = Paragraph::new(footer)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(FG_DIM).bg(MENU_BG));
            f.render_widget(footer, footer_area);
        }
    }
}
