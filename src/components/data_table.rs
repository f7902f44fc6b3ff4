use std::borrow::Cow;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use unicode_width::UnicodeWidthStr;

use super::rect_contains;
use crate::records::{ColumnDescriptor, Record};
use crate::ui::theme::*;

/// Shown for absent or blank cell values.
pub const PLACEHOLDER: &str = "-";

const ACTIONS_HEADER: &str = "";
const COLUMN_SPACING: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn affordance(&self) -> &'static str {
        match self {
            RowAction::View => "[v]",
            RowAction::Edit => "[e]",
            RowAction::Delete => "[d]",
        }
    }
}

/// Which per-row affordances a page exposes, plus whether it accepts new records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub create: bool,
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
}

impl RowActions {
    pub const ALL: RowActions = RowActions {
        create: true,
        view: true,
        edit: true,
        delete: true,
    };

    pub const READ_ONLY: RowActions = RowActions {
        create: false,
        view: true,
        edit: false,
        delete: true,
    };
}

type RowCallback<'a, R> = Box<dyn FnMut(&R) + 'a>;

/// Read-only listing of records with optional per-row action dispatch.
///
/// Rows render in the order given; the table never sorts, filters or mutates
/// them. An action affordance exists only when its callback was supplied.
pub struct DataTable<'a, R> {
    rows: Vec<&'a R>,
    columns: &'a [ColumnDescriptor],
    empty_message: Cow<'a, str>,
    title: Cow<'a, str>,
    on_view: Option<RowCallback<'a, R>>,
    on_edit: Option<RowCallback<'a, R>>,
    on_delete: Option<RowCallback<'a, R>>,
}

impl<'a, R: Record> DataTable<'a, R> {
    pub fn new(rows: impl IntoIterator<Item = &'a R>, columns: &'a [ColumnDescriptor]) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            columns,
            empty_message: Cow::Borrowed("No records found."),
            title: Cow::Borrowed(""),
            on_view: None,
            on_edit: None,
            on_delete: None,
        }
    }

    pub fn empty_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn title(mut self, title: impl Into<Cow<'a, str>>) -> Self {
        self.title = title.into();
        self
    }

    pub fn on_view(mut self, callback: impl FnMut(&R) + 'a) -> Self {
        self.on_view = Some(Box::new(callback));
        self
    }

    pub fn on_edit(mut self, callback: impl FnMut(&R) + 'a) -> Self {
        self.on_edit = Some(Box::new(callback));
        self
    }

    pub fn on_delete(mut self, callback: impl FnMut(&R) + 'a) -> Self {
        self.on_delete = Some(Box::new(callback));
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Affordances present, in display order.
    pub fn actions(&self) -> Vec<RowAction> {
        let mut actions = Vec::with_capacity(3);
        if self.on_view.is_some() {
            actions.push(RowAction::View);
        }
        if self.on_edit.is_some() {
            actions.push(RowAction::Edit);
        }
        if self.on_delete.is_some() {
            actions.push(RowAction::Delete);
        }
        actions
    }

    /// Invokes the callback for `action` with the row at `index`.
    /// Returns `false` when the affordance is absent or the index is out of range.
    pub fn activate(&mut self, action: RowAction, index: usize) -> bool {
        let Some(row) = self.rows.get(index).copied() else {
            return false;
        };
        let callback = match action {
            RowAction::View => self.on_view.as_mut(),
            RowAction::Edit => self.on_edit.as_mut(),
            RowAction::Delete => self.on_delete.as_mut(),
        };
        match callback {
            Some(callback) => {
                callback(row);
                true
            }
            None => false,
        }
    }

    /// Text shown in one cell: first line of the value, or the placeholder.
    pub fn cell_text<'r>(row: &'r R, column: &ColumnDescriptor) -> Cow<'r, str> {
        match row.field(column.field).map(str::trim) {
            Some(value) if !value.is_empty() => match value.split_once('\n') {
                Some((first, _)) => Cow::Owned(format!("{}…", first.trim_end())),
                None => Cow::Borrowed(value),
            },
            _ => Cow::Borrowed(PLACEHOLDER),
        }
    }

    /// Cell texts for every row, one entry per column.
    pub fn cells(&self) -> Vec<Vec<Cow<'a, str>>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| Self::cell_text(*row, column))
                    .collect()
            })
            .collect()
    }

    fn affordance_strip(&self) -> String {
        self.actions()
            .iter()
            .map(RowAction::affordance)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn widths(&self, affordances: &str) -> Vec<Constraint> {
        let mut widths: Vec<Constraint> = self
            .columns
            .iter()
            .map(|_| Constraint::Ratio(1, self.columns.len().max(1) as u32))
            .collect();
        if !affordances.is_empty() {
            widths.push(Constraint::Length(UnicodeWidthStr::width(affordances) as u16));
        }
        widths
    }

    /// Row index under a click at (`column`, `row`), given the area the table
    /// was rendered into and the scroll offset of its state.
    pub fn row_at(&self, area: Rect, offset: usize, column: u16, row: u16) -> Option<usize> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let body = Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        };
        if !rect_contains(&body, column, row) {
            return None;
        }
        let index = offset + (row - body.y) as usize;
        (index < self.rows.len()).then_some(index)
    }

    /// Affordance and row index under a click, or `None` when the click
    /// misses every `[v]`, `[e]` and `[d]` button.
    pub fn hit_test(&self, area: Rect, offset: usize, column: u16, row: u16) -> Option<(RowAction, usize)> {
        let index = self.row_at(area, offset, column, row)?;
        let affordances = self.affordance_strip();
        if affordances.is_empty() {
            return None;
        }
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(self.widths(&affordances))
            .spacing(COLUMN_SPACING)
            .split(inner);
        let strip = *cells.last()?;
        if column < strip.x || column >= strip.x.saturating_add(strip.width) {
            return None;
        }
        // Each button is three cells wide and followed by one blank cell.
        let offset_in_strip = usize::from(column - strip.x);
        if offset_in_strip % 4 == 3 {
            return None;
        }
        let action = *self.actions().get(offset_in_strip / 4)?;
        Some((action, index))
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect, state: &mut TableState) {
        let block = Block::default()
            .title(self.title.as_ref())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_IDLE))
            .style(Style::default().bg(BG_PANEL));

        if self.rows.is_empty() {
            let empty = Paragraph::new(self.empty_message.as_ref())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(FG_DIM).bg(BG_PANEL))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let actions = self.actions();
        let affordances = self.affordance_strip();

        let mut header_cells: Vec<Cell> = self
            .columns
            .iter()
            .map(|column| Cell::from(column.label))
            .collect();
        let widths = self.widths(&affordances);
        if !actions.is_empty() {
            header_cells.push(Cell::from(ACTIONS_HEADER));
        }
        let header = Row::new(header_cells).style(
            Style::default()
                .fg(BAR_TEXT)
                .bg(BAR_BG)
                .add_modifier(Modifier::BOLD),
        );

        let body: Vec<Row> = self
            .cells()
            .into_iter()
            .map(|cells| {
                let mut cells: Vec<Cell> = cells.into_iter().map(Cell::from).collect();
                if !actions.is_empty() {
                    cells.push(Cell::from(affordances.clone()).style(Style::default().fg(FG_DIM)));
                }
                Row::new(cells)
            })
            .collect();

        if state.selected().is_some_and(|idx| idx >= self.rows.len()) {
            state.select(Some(self.rows.len() - 1));
        }

        let table = Table::new(body, widths)
            .column_spacing(COLUMN_SPACING)
            .header(header)
            .block(block)
            .style(Style::default().fg(FG_PRIMARY).bg(BG_PANEL))
            .highlight_style(
                Style::default()
                    .bg(PANEL_HIGHLIGHT_BG)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_stateful_widget(table, area, state);
    }
}
