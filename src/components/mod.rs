//! Reusable widgets for the backoffice: the record table, the modal overlay,
//! the descriptor-driven form, and the management page composing them.

pub mod data_table;
pub mod form;
pub mod management_page;
pub mod modal;
pub mod text_input;

pub use data_table::RowActions;
pub use management_page::{ManagementPage, PageConfig, PageEvent};
pub use modal::{Modal, ModalInput};
pub use text_input::TextInput;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1])[1]
}

pub(crate) fn rect_contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
