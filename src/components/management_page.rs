//! Full CRUD screen over one collection, assembled from `DataTable`, `Modal`
//! and `FormState`.
//!
//! The page never owns the records. Every operation reads the current rows
//! from a `CollectionStore` and, when something changes, hands the store a
//! complete replacement sequence.

use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, info};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, TableState, Wrap};

use super::data_table::{DataTable, RowAction, RowActions};
use super::form::FormState;
use super::modal::{Modal, ModalInput};
use crate::i18n::LocaleStore;
use crate::records::{
    contains_id, filter, prepend, remove_by_id, replace_by_id, CollectionStore, ColumnDescriptor,
    FieldDescriptor, IdSource, Record, RecordId,
};
use crate::ui::theme::*;

const MODAL_WIDTH: u16 = 70;
const MODAL_HEIGHT: u16 = 80;

/// Declarative description of one entity's admin screen.
pub struct PageConfig<R> {
    pub columns: &'static [ColumnDescriptor],
    pub fields: &'static [FieldDescriptor],
    pub searchable: &'static [&'static str],
    pub actions: RowActions,
    /// Zero-value factory used to seed the create form.
    pub blank: fn() -> R,
}

impl<R> Clone for PageConfig<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for PageConfig<R> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone)]
enum ModalState<R> {
    Form { mode: FormMode, form: FormState<R> },
    View(R),
}

/// What a page interaction did, for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    None,
    Created(RecordId),
    Updated(RecordId),
    Deleted(RecordId),
    /// Confirmation was refused because this required field is blank.
    Invalid(&'static str),
    Closed,
}

type Request<R> = RefCell<Option<(RowAction, R)>>;

pub struct ManagementPage<R> {
    config: PageConfig<R>,
    query: String,
    searching: bool,
    table: TableState,
    modal: Option<ModalState<R>>,
    ids: IdSource,
    table_area: Rect,
    body_area: Rect,
}

impl<R: Record> ManagementPage<R> {
    pub fn new(config: PageConfig<R>) -> Self {
        Self {
            config,
            query: String::new(),
            searching: false,
            table: TableState::default().with_selected(Some(0)),
            modal: None,
            ids: IdSource::new(),
            table_area: Rect::default(),
            body_area: Rect::default(),
        }
    }

    pub fn config(&self) -> &PageConfig<R> {
        &self.config
    }

    // --- Search ---

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.table.select(Some(0));
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.query.push(ch);
        self.table.select(Some(0));
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.table.select(Some(0));
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Rows currently visible under the search query, in source order.
    pub fn visible<'a>(&self, rows: &'a [R]) -> Vec<&'a R> {
        filter(rows, &self.query, self.config.searchable)
    }

    // --- Selection ---

    pub fn selected(&self) -> Option<usize> {
        self.table.selected()
    }

    pub fn select(&mut self, index: usize) {
        self.table.select(Some(index));
    }

    fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.table.select(Some(0));
            return;
        }
        let current = self.table.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.table.select(Some(next as usize));
    }

    fn clamp_selection(&mut self, len: usize) {
        let selected = self.table.selected().unwrap_or(0);
        self.table.select(Some(selected.min(len.saturating_sub(1))));
    }

    // --- Modal lifecycle ---

    pub fn is_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn form(&self) -> Option<&FormState<R>> {
        match self.modal.as_ref() {
            Some(ModalState::Form { form, .. }) => Some(form),
            _ => None,
        }
    }

    pub fn form_mode(&self) -> Option<FormMode> {
        match self.modal.as_ref() {
            Some(ModalState::Form { mode, .. }) => Some(*mode),
            _ => None,
        }
    }

    pub fn viewing(&self) -> Option<&R> {
        match self.modal.as_ref() {
            Some(ModalState::View(row)) => Some(row),
            _ => None,
        }
    }

    /// Opens an empty form. Pages that do not accept new records ignore this.
    pub fn open_create(&mut self) {
        if !self.config.actions.create {
            debug!("Create ignored on a page without the create action");
            return;
        }
        let draft = (self.config.blank)();
        self.modal = Some(ModalState::Form {
            mode: FormMode::Create,
            form: FormState::new(draft, self.config.fields),
        });
    }

    pub fn open_edit(&mut self, row: &R) {
        self.modal = Some(ModalState::Form {
            mode: FormMode::Edit(row.id()),
            form: FormState::new(row.clone(), self.config.fields),
        });
    }

    pub fn open_view(&mut self, row: &R) {
        self.modal = Some(ModalState::View(row.clone()));
    }

    /// Closes the modal and discards any in-progress edits.
    pub fn close(&mut self) {
        if self.modal.take().is_some() {
            debug!("Management modal closed");
        }
    }

    // --- Mutations ---

    /// Assigns a fresh id to `entity` and places it at the front of the collection.
    pub fn insert<S>(&mut self, store: &mut S, mut entity: R) -> RecordId
    where
        S: CollectionStore<R> + ?Sized,
    {
        let id = self.ids.next_for(store.rows());
        entity.set_id(id);
        let next = prepend(store.rows(), entity);
        store.replace(next);
        id
    }

    /// Commits the open form. Create prepends with a new id; edit replaces the
    /// row sharing the edited id and keeps its position.
    pub fn confirm<S>(&mut self, store: &mut S) -> PageEvent
    where
        S: CollectionStore<R> + ?Sized,
    {
        let Some(ModalState::Form { form, .. }) = self.modal.as_mut() else {
            return PageEvent::None;
        };
        if let Some(label) = form.missing_required() {
            form.error = Some(label.to_string());
            return PageEvent::Invalid(label);
        }
        let Some(ModalState::Form { mode, form }) = self.modal.take() else {
            return PageEvent::None;
        };
        let mut draft = form.into_draft();
        match mode {
            FormMode::Create => {
                let id = self.insert(store, draft);
                self.table.select(Some(0));
                info!("Created record {id}");
                PageEvent::Created(id)
            }
            FormMode::Edit(id) => {
                if !contains_id(store.rows(), id) {
                    debug!("Edited record {id} no longer exists");
                    return PageEvent::Closed;
                }
                draft.set_id(id);
                let next = replace_by_id(store.rows(), draft);
                store.replace(next);
                info!("Updated record {id}");
                PageEvent::Updated(id)
            }
        }
    }

    /// Removes the record with `id`. Unknown ids are ignored.
    pub fn delete<S>(&mut self, store: &mut S, id: RecordId) -> PageEvent
    where
        S: CollectionStore<R> + ?Sized,
    {
        if !contains_id(store.rows(), id) {
            debug!("Delete of missing record {id} ignored");
            return PageEvent::None;
        }
        let next = remove_by_id(store.rows(), id);
        store.replace(next);
        let visible = self.visible(store.rows()).len();
        self.clamp_selection(visible);
        info!("Deleted record {id}");
        PageEvent::Deleted(id)
    }

    // --- Table wiring ---

    fn table_for<'a>(&self, rows: &'a [R], request: &'a Request<R>) -> DataTable<'a, R> {
        let actions = self.config.actions;
        let mut table = DataTable::new(self.visible(rows), self.config.columns);
        if actions.view {
            table = table.on_view(move |row: &R| *request.borrow_mut() = Some((RowAction::View, row.clone())));
        }
        if actions.edit {
            table = table.on_edit(move |row: &R| *request.borrow_mut() = Some((RowAction::Edit, row.clone())));
        }
        if actions.delete {
            table = table.on_delete(move |row: &R| {
                *request.borrow_mut() = Some((RowAction::Delete, row.clone()))
            });
        }
        table
    }

    /// Activates a row action on the selected visible row.
    pub fn activate<S>(&mut self, store: &mut S, action: RowAction) -> PageEvent
    where
        S: CollectionStore<R> + ?Sized,
    {
        let Some(index) = self.table.selected() else {
            return PageEvent::None;
        };
        let request: Request<R> = RefCell::new(None);
        {
            let mut table = self.table_for(store.rows(), &request);
            table.activate(action, index);
        }
        self.apply_request(store, request)
    }

    fn apply_request<S>(&mut self, store: &mut S, request: Request<R>) -> PageEvent
    where
        S: CollectionStore<R> + ?Sized,
    {
        match request.into_inner() {
            Some((RowAction::View, row)) => {
                self.open_view(&row);
                PageEvent::None
            }
            Some((RowAction::Edit, row)) => {
                self.open_edit(&row);
                PageEvent::None
            }
            Some((RowAction::Delete, row)) => self.delete(store, row.id()),
            None => PageEvent::None,
        }
    }

    // --- Input ---

    fn modal_widget<'a>(&self, title: &'a str) -> Modal<'a> {
        Modal::new(self.modal.is_some(), title).size(MODAL_WIDTH, MODAL_HEIGHT)
    }

    pub fn handle_key<S>(&mut self, key: KeyEvent, store: &mut S) -> PageEvent
    where
        S: CollectionStore<R> + ?Sized,
    {
        if self.modal.is_some() {
            return self.handle_modal_key(key, store);
        }
        if self.searching {
            self.handle_search_key(key);
            return PageEvent::None;
        }

        let visible = self.visible(store.rows()).len();
        match key.code {
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Char('n') => self.open_create(),
            KeyCode::Char('e') | KeyCode::Enter => return self.activate(store, RowAction::Edit),
            KeyCode::Char('v') => return self.activate(store, RowAction::View),
            KeyCode::Char('d') | KeyCode::Delete => return self.activate(store, RowAction::Delete),
            KeyCode::Up => self.move_selection(-1, visible),
            KeyCode::Down => self.move_selection(1, visible),
            KeyCode::PageUp => self.move_selection(-5, visible),
            KeyCode::PageDown => self.move_selection(5, visible),
            KeyCode::Home => self.move_selection(isize::MIN / 2, visible),
            KeyCode::End => self.move_selection(isize::MAX / 2, visible),
            KeyCode::Esc if !self.query.is_empty() => self.set_query(""),
            _ => {}
        }
        PageEvent::None
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => self.searching = false,
            KeyCode::Backspace => self.pop_query_char(),
            KeyCode::Char(ch)
                if !(key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT)) =>
            {
                self.push_query_char(ch)
            }
            _ => {}
        }
    }

    fn handle_modal_key<S>(&mut self, key: KeyEvent, store: &mut S) -> PageEvent
    where
        S: CollectionStore<R> + ?Sized,
    {
        let mut closed = false;
        let input = self
            .modal_widget("")
            .on_close(|| closed = true)
            .handle_key(key);
        if closed {
            self.close();
            return PageEvent::Closed;
        }
        if input != ModalInput::Body {
            return PageEvent::None;
        }

        let save = key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL);
        match self.modal.as_mut() {
            Some(ModalState::Form { form, .. }) => {
                if save {
                    return self.confirm(store);
                }
                form.handle_key(key);
                PageEvent::None
            }
            Some(ModalState::View(_)) => {
                if key.code == KeyCode::Enter {
                    self.close();
                    return PageEvent::Closed;
                }
                PageEvent::None
            }
            None => PageEvent::None,
        }
    }

    /// Routes a mouse event; `frame` is the full terminal area the modal covers.
    pub fn handle_mouse<S>(&mut self, event: MouseEvent, frame: Rect, store: &mut S) -> PageEvent
    where
        S: CollectionStore<R> + ?Sized,
    {
        if self.modal.is_some() {
            let mut closed = false;
            let input = self
                .modal_widget("")
                .on_close(|| closed = true)
                .handle_mouse(event, frame);
            if closed {
                self.close();
                return PageEvent::Closed;
            }
            if input == ModalInput::Body
                && event.kind == MouseEventKind::Down(MouseButton::Left)
            {
                let area = self.body_area;
                if let Some(ModalState::Form { form, .. }) = self.modal.as_mut() {
                    if let Some(index) = form.field_at(area, event.column, event.row) {
                        form.focus(index);
                    }
                }
            }
            return PageEvent::None;
        }

        let visible = self.visible(store.rows()).len();
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let request: Request<R> = RefCell::new(None);
                let (area, offset) = (self.table_area, self.table.offset());
                let hit = {
                    let mut table = self.table_for(store.rows(), &request);
                    match table.hit_test(area, offset, event.column, event.row) {
                        Some((action, index)) => {
                            table.activate(action, index);
                            Some(index)
                        }
                        None => table.row_at(area, offset, event.column, event.row),
                    }
                };
                if let Some(index) = hit {
                    self.table.select(Some(index));
                    return self.apply_request(store, request);
                }
            }
            MouseEventKind::ScrollUp => self.move_selection(-1, visible),
            MouseEventKind::ScrollDown => self.move_selection(1, visible),
            _ => {}
        }
        PageEvent::None
    }

    // --- Rendering ---

    /// Draws search box, table and key hints into `area`, plus the modal over
    /// the whole `frame` when one is open.
    pub fn render(
        &mut self,
        f: &mut Frame<'_>,
        frame: Rect,
        area: Rect,
        title: &str,
        rows: &[R],
        locale: &LocaleStore,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_search(f, chunks[0], locale);

        self.table_area = chunks[1];
        let request: Request<R> = RefCell::new(None);
        let visible_title = format!("{title} ({}/{})", self.visible(rows).len(), rows.len());
        let table = self
            .table_for(rows, &request)
            .title(visible_title)
            .empty_message(locale.text("admin.empty"));
        table.render(f, chunks[1], &mut self.table);

        let hints = Paragraph::new(locale.text("admin.keys").into_owned())
            .style(Style::default().fg(FG_DIM).bg(BG_PRIMARY));
        f.render_widget(hints, chunks[2]);

        self.render_modal(f, frame, locale);
    }

    fn render_search(&self, f: &mut Frame<'_>, area: Rect, locale: &LocaleStore) {
        let border = if self.searching { BORDER_FOCUS } else { BORDER_IDLE };
        let block = Block::default()
            .title(locale.text("admin.search").into_owned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        let line = if self.query.is_empty() && !self.searching {
            Line::from(Span::styled(locale.text("admin.search_hint"), Style::default().fg(FG_DIM)))
        } else {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(FG_PRIMARY)),
                Span::styled(self.query.as_str(), Style::default().fg(Color::White)),
            ])
        };
        f.render_widget(Paragraph::new(line).block(block), area);
        if self.searching && inner.width > 2 && inner.height > 0 {
            let offset = unicode_width::UnicodeWidthStr::width(self.query.as_str()) as u16 + 2;
            f.set_cursor((inner.x + offset).min(inner.x + inner.width - 1), inner.y);
        }
    }

    fn render_modal(&mut self, f: &mut Frame<'_>, frame: Rect, locale: &LocaleStore) {
        let Some(modal) = self.modal.as_ref() else {
            return;
        };
        let (title, footer) = match modal {
            ModalState::Form { mode, form } => {
                let title = match mode {
                    FormMode::Create => locale.text("admin.new"),
                    FormMode::Edit(_) => locale.text("admin.edit"),
                };
                let mut footer = vec![Line::from(locale.text("admin.form_hint").into_owned())];
                if let Some(label) = form.error.as_deref() {
                    footer.insert(
                        0,
                        Line::from(Span::styled(
                            format!("{} {label}", locale.text("admin.required")),
                            Style::default().fg(FG_ERROR),
                        )),
                    );
                }
                (title, footer)
            }
            ModalState::View(_) => (
                locale.text("admin.view"),
                vec![Line::from(locale.text("admin.view_hint").into_owned())],
            ),
        };

        let fields = self.config.fields;
        let mut body_area = Rect::default();
        self.modal_widget(&title)
            .footer(footer)
            .render(f, frame, |f, body| {
                body_area = body;
                match modal {
                    ModalState::Form { form, .. } => form.render(f, body),
                    ModalState::View(row) => {
                        let lines: Vec<Line> = fields
                            .iter()
                            .flat_map(|field| {
                                let value = row.field(field.field).unwrap_or("");
                                let mut lines = vec![Line::from(Span::styled(
                                    field.label,
                                    Style::default().fg(BAR_TEXT).add_modifier(Modifier::BOLD),
                                ))];
                                lines.extend(value.lines().map(|line| Line::from(line.to_string())));
                                lines.push(Line::default());
                                lines
                            })
                            .collect();
                        f.render_widget(
                            Paragraph::new(lines)
                                .wrap(Wrap { trim: false })
                                .style(Style::default().fg(MENU_TEXT).bg(MENU_BG)),
                            body,
                        );
                    }
                }
            });
        self.body_area = body_area;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tests::buffer_text;
    use crate::i18n::Language;
    use crate::records::fixtures::{item, Item};
    use crate::records::Collection;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::collections::HashSet;

    const COLUMNS: &[ColumnDescriptor] = &[
        ColumnDescriptor::new("nome", "Nome"),
        ColumnDescriptor::new("status", "Status"),
    ];
    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::line("nome", "Nome").required(),
        FieldDescriptor::line("status", "Status"),
    ];

    fn blank() -> Item {
        item(0, "", "Ativo")
    }

    fn page(actions: RowActions) -> ManagementPage<Item> {
        ManagementPage::new(PageConfig {
            columns: COLUMNS,
            fields: FIELDS,
            searchable: &["nome"],
            actions,
            blank,
        })
    }

    fn collection() -> Collection<Item> {
        Collection::new(vec![item(1, "A", "Ativo"), item(2, "B", "Ativo")])
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn type_text(page: &mut ManagementPage<Item>, store: &mut Collection<Item>, text: &str) {
        for ch in text.chars() {
            page.handle_key(key(KeyCode::Char(ch)), store);
        }
    }

    #[test]
    fn search_filters_visible_rows_without_touching_source() {
        let store = collection();
        let mut page = page(RowActions::ALL);
        page.set_query("b");
        let visible: Vec<u64> = page.visible(store.rows()).iter().map(|row| row.id).collect();
        assert_eq!(visible, vec![2]);
        assert_eq!(store.len(), 2);
        page.set_query("");
        assert_eq!(page.visible(store.rows()).len(), 2);
    }

    #[test]
    fn search_mode_collects_keystrokes() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        page.handle_key(key(KeyCode::Char('/')), &mut store);
        assert!(page.is_searching());
        type_text(&mut page, &mut store, "bx");
        page.handle_key(key(KeyCode::Backspace), &mut store);
        assert_eq!(page.query(), "b");
        page.handle_key(key(KeyCode::Enter), &mut store);
        assert!(!page.is_searching());
        page.handle_key(key(KeyCode::Esc), &mut store);
        assert_eq!(page.query(), "");
    }

    #[test]
    fn create_prepends_with_a_fresh_id() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        page.handle_key(key(KeyCode::Char('n')), &mut store);
        assert_eq!(page.form_mode(), Some(FormMode::Create));
        assert_eq!(page.form().unwrap().draft().status, "Ativo");
        type_text(&mut page, &mut store, "Chia");
        assert_eq!(store.len(), 2, "typing must not touch the collection");

        let event = page.handle_key(ctrl('s'), &mut store);
        let PageEvent::Created(id) = event else {
            panic!("expected a create, got {event:?}");
        };
        assert!(!page.is_open());
        assert_eq!(store.rows()[0], item(id, "Chia", "Ativo"));
        assert!(id > 2);
        assert_eq!(&store.rows()[1..], collection().rows());
    }

    #[test]
    fn create_refuses_blank_required_field() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        page.open_create();
        assert_eq!(page.confirm(&mut store), PageEvent::Invalid("Nome"));
        assert!(page.is_open());
        assert_eq!(page.form().unwrap().error.as_deref(), Some("Nome"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn edit_replaces_in_place_and_keeps_id() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        page.select(0);
        page.handle_key(key(KeyCode::Char('e')), &mut store);
        assert_eq!(page.form_mode(), Some(FormMode::Edit(1)));
        assert_eq!(page.form().unwrap().draft().nome, "A");
        type_text(&mut page, &mut store, "Z");
        assert_eq!(store.rows()[0].nome, "A");
        assert_eq!(page.handle_key(ctrl('s'), &mut store), PageEvent::Updated(1));
        assert_eq!(store.rows(), &[item(1, "AZ", "Ativo"), item(2, "B", "Ativo")]);
    }

    #[test]
    fn edit_of_vanished_record_is_a_noop() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        page.open_edit(&item(1, "A", "Ativo"));
        store.replace(vec![item(2, "B", "Ativo")]);
        assert_eq!(page.confirm(&mut store), PageEvent::Closed);
        assert_eq!(store.rows(), &[item(2, "B", "Ativo")]);
    }

    #[test]
    fn cancel_discards_edits() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        page.select(1);
        page.handle_key(key(KeyCode::Enter), &mut store);
        type_text(&mut page, &mut store, "zzz");
        assert_eq!(page.handle_key(key(KeyCode::Esc), &mut store), PageEvent::Closed);
        assert!(!page.is_open());
        assert_eq!(store, collection());
    }

    #[test]
    fn delete_removes_selected_row_only() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        page.select(1);
        assert_eq!(page.handle_key(key(KeyCode::Char('d')), &mut store), PageEvent::Deleted(2));
        assert_eq!(store.rows(), &[item(1, "A", "Ativo")]);
        assert_eq!(page.selected(), Some(0));
        assert_eq!(page.delete(&mut store, 2), PageEvent::None);
        assert_eq!(store.rows(), &[item(1, "A", "Ativo")]);
    }

    #[test]
    fn delete_acts_on_filtered_selection() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        page.set_query("b");
        page.select(0);
        assert_eq!(page.activate(&mut store, RowAction::Delete), PageEvent::Deleted(2));
    }

    #[test]
    fn missing_affordance_does_nothing() {
        let mut store = collection();
        let mut page = page(RowActions::READ_ONLY);
        page.select(0);
        page.handle_key(key(KeyCode::Char('e')), &mut store);
        assert!(!page.is_open());
        page.handle_key(key(KeyCode::Char('v')), &mut store);
        assert_eq!(page.viewing(), Some(&item(1, "A", "Ativo")));
        page.handle_key(key(KeyCode::Enter), &mut store);
        assert!(!page.is_open());
    }

    #[test]
    fn create_then_delete_restores_collection() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        let mut issued = HashSet::new();
        for _ in 0..20 {
            let id = page.insert(&mut store, item(0, "N", ""));
            assert!(issued.insert(id));
            assert!(id > 2);
        }
        for id in issued {
            page.delete(&mut store, id);
        }
        assert_eq!(store, collection());
    }

    #[test]
    fn mouse_click_outside_modal_cancels() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        page.open_create();
        let frame = Rect::new(0, 0, 80, 24);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(page.handle_mouse(click, frame, &mut store), PageEvent::Closed);
        assert!(!page.is_open());
        assert_eq!(store, collection());
    }

    #[test]
    fn pages_without_create_refuse_new_records() {
        let mut store = Collection::new(vec![item(1, "A", "Ativo")]);
        let mut page = page(RowActions::READ_ONLY);
        page.handle_key(key(KeyCode::Char('n')), &mut store);
        assert!(!page.is_open());
        type_text(&mut page, &mut store, "z");
        assert_eq!(page.handle_key(ctrl('s'), &mut store), PageEvent::None);
        assert_eq!(store.rows(), &[item(1, "A", "Ativo")]);
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn rendered(page: &mut ManagementPage<Item>, store: &Collection<Item>) -> String {
        let locale = LocaleStore::bundled(Language::En).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                page.render(f, area, area, "Itens", store.rows(), &locale);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn cell_of(line: &str, needle: &str) -> u16 {
        let byte = line.find(needle).unwrap();
        line[..byte].chars().count() as u16
    }

    #[test]
    fn clicking_row_buttons_runs_their_action() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        let frame = Rect::new(0, 0, 80, 20);
        let text = rendered(&mut page, &store);
        // Search box takes rows 0-2, the table border and header rows 3-4.
        let second_row = text.lines().nth(6).unwrap();
        assert!(second_row.contains('B'));

        let delete_x = cell_of(second_row, "[d]");
        assert_eq!(page.handle_mouse(left_click(delete_x + 1, 6), frame, &mut store), PageEvent::Deleted(2));
        assert_eq!(store.rows(), &[item(1, "A", "Ativo")]);

        let text = rendered(&mut page, &store);
        let first_row = text.lines().nth(5).unwrap();
        let edit_x = cell_of(first_row, "[e]");
        assert_eq!(page.handle_mouse(left_click(edit_x, 5), frame, &mut store), PageEvent::None);
        assert_eq!(page.form_mode(), Some(FormMode::Edit(1)));
    }

    #[test]
    fn clicking_a_row_outside_the_buttons_only_selects_it() {
        let mut store = collection();
        let mut page = page(RowActions::ALL);
        let frame = Rect::new(0, 0, 80, 20);
        rendered(&mut page, &store);
        assert_eq!(page.handle_mouse(left_click(3, 6), frame, &mut store), PageEvent::None);
        assert_eq!(page.selected(), Some(1));
        assert!(!page.is_open());
        assert_eq!(store, collection());
    }

    #[test]
    fn render_shows_modal_and_empty_state() {
        let locale = LocaleStore::bundled(Language::En).unwrap();
        let store = collection();
        let mut page = page(RowActions::ALL);
        page.set_query("nothing matches");
        page.open_create();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                page.render(f, area, area, "Itens", store.rows(), &locale);
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("New record"));
        assert!(text.contains("Nome *"));

        page.close();
        terminal
            .draw(|f| {
                let area = f.size();
                page.render(f, area, area, "Itens", store.rows(), &locale);
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("No records found."));
        assert!(!text.contains("New record"));
    }
}
