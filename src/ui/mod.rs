use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, LoginField, Route};
use crate::components::{centered_rect, TextInput};
use crate::pages::{render_dashboard, AdminSection};
use crate::public::{render_public, PublicPage};

pub mod theme;
use theme::*;

const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 20;
const SIDEBAR_WIDTH: u16 = 22;

fn cell_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.size();
    app.hits.clear(size);
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let block = Paragraph::new(format!("Terminal too small, need at least {MIN_WIDTH}x{MIN_HEIGHT}."))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(app.locale.text("brand").into_owned())
                    .borders(Borders::ALL)
                    .style(Style::default().fg(FG_PRIMARY).bg(MENU_BG)),
            )
            .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY));
        f.render_widget(block, size);
        return;
    }

    let base = Block::default().style(Style::default().bg(BG_PRIMARY));
    f.render_widget(base, size);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);
    let header_area = vertical[0];
    let body_area = vertical[1];
    let status_area = vertical[2];

    render_header(f, app, header_area);
    match app.route {
        Route::Public(page) => render_public(f, body_area, page, &app.locale),
        Route::Login => render_login(f, app, body_area),
        Route::Admin(section) => render_admin(f, app, body_area, section),
    }
    render_status_bar(f, app, status_area);

    app.newsletter.render(f, size, &app.locale);
}

fn render_header(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    f.render_widget(Clear, area);
    let base = Block::default().style(Style::default().bg(BAR_BG));
    f.render_widget(base, area);

    let brand = format!(" {} ", app.locale.text("brand"));
    let language = format!(" [{}] ", app.locale.language().code().to_uppercase());
    let area_end = area
        .x
        .saturating_add(area.width)
        .saturating_sub(cell_width(&language));
    let mut cursor = area.x.saturating_add(cell_width(&brand));
    let mut spans: Vec<Span> = vec![Span::styled(
        brand,
        Style::default().fg(BAR_TEXT).bg(BAR_BG).add_modifier(Modifier::BOLD),
    )];

    let mut targets: Vec<(Route, String, bool)> = PublicPage::ALL
        .iter()
        .map(|page| {
            (
                Route::Public(*page),
                app.locale.text(&page.nav_key()).into_owned(),
                app.route == Route::Public(*page),
            )
        })
        .collect();
    targets.push((
        Route::Admin(AdminSection::Dashboard),
        app.locale.text("nav.login").into_owned(),
        app.route == Route::Login || app.route.is_admin(),
    ));

    for (route, title, active) in targets {
        if cursor >= area_end {
            break;
        }
        let label = format!("[{title}]");
        let width = cell_width(&label);
        let available = area_end.saturating_sub(cursor).max(1);
        let rect_width = width.min(available).max(1);
        let mut style = Style::default().fg(BAR_TEXT).bg(BAR_BG);
        if active {
            style = style
                .fg(BAR_HIGHLIGHT_TEXT)
                .bg(BAR_HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(label, style));
        app.hits.register(
            route,
            Rect {
                x: cursor,
                y: area.y,
                width: rect_width,
                height: 1,
            },
        );
        cursor = cursor.saturating_add(rect_width);
        if cursor < area_end {
            spans.push(Span::styled(" ", Style::default().bg(BAR_BG)));
            cursor = cursor.saturating_add(1);
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(BAR_TEXT).bg(BAR_BG)),
        area,
    );
    f.render_widget(
        Paragraph::new(language)
            .alignment(Alignment::Right)
            .style(Style::default().fg(BAR_TEXT).bg(BAR_BG)),
        area,
    );
}

fn render_admin(f: &mut Frame<'_>, app: &mut App, area: Rect, section: AdminSection) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(area);
    let sidebar = columns[0];
    let content = columns[1];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_IDLE))
        .style(Style::default().bg(BG_PANEL));
    let inner = block.inner(sidebar);
    f.render_widget(block, sidebar);

    let mut lines = Vec::with_capacity(AdminSection::ALL.len());
    for (idx, item) in AdminSection::ALL.iter().enumerate() {
        let title = app.locale.text(item.title_key()).into_owned();
        let style = if *item == section {
            Style::default()
                .fg(Color::Black)
                .bg(PANEL_HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(FG_PRIMARY)
        };
        lines.push(Line::from(Span::styled(format!(" {title:<width$}", width = inner.width.saturating_sub(1) as usize), style)));
        let row = inner.y.saturating_add(idx as u16);
        if row < inner.y.saturating_add(inner.height) {
            app.hits.register(
                Route::Admin(*item),
                Rect {
                    x: inner.x,
                    y: row,
                    width: inner.width,
                    height: 1,
                },
            );
        }
    }
    f.render_widget(Paragraph::new(lines), inner);

    let frame = app.hits.frame;
    let title = app.locale.text(section.title_key()).into_owned();
    match app.admin.screen_mut(section) {
        Some(screen) => screen.render(f, frame, content, &title, &app.locale),
        None => render_dashboard(f, content, &app.admin, &app.locale),
    }
}

fn render_login(f: &mut Frame<'_>, app: &App, area: Rect) {
    let panel = centered_rect(50, 70, area);
    let block = Block::default()
        .title(app.locale.text("login.title").into_owned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MENU_BORDER))
        .style(Style::default().bg(MENU_BG));
    let inner = block.inner(panel);
    f.render_widget(Clear, panel);
    f.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(inner);

    let login = &app.login;
    render_login_field(
        f,
        rows[0],
        &app.locale.text("login.username"),
        &login.username,
        login.focus == LoginField::Username && !login.is_pending(),
    );
    render_login_field(
        f,
        rows[1],
        &app.locale.text("login.password"),
        &login.password,
        login.focus == LoginField::Password && !login.is_pending(),
    );

    let feedback = if login.is_pending() {
        Line::from(Span::styled(
            app.locale.text("login.pending").into_owned(),
            Style::default().fg(BORDER_FOCUS),
        ))
    } else if let Some(error) = login.error.as_deref() {
        Line::from(Span::styled(error.to_string(), Style::default().fg(FG_ERROR)))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(feedback).style(Style::default().bg(MENU_BG)), rows[2]);

    f.render_widget(
        Paragraph::new(app.locale.text("login.hint").into_owned())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(FG_DIM).bg(MENU_BG)),
        rows[3],
    );
}

fn render_login_field(f: &mut Frame<'_>, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let border = if focused { BORDER_FOCUS } else { BORDER_IDLE };
    let block = Block::default()
        .title(label.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(MENU_BG));
    let inner = block.inner(area);
    let text = input.display_lines().join("");
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(MENU_TEXT).bg(MENU_BG)),
        area,
    );
    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner
            .x
            .saturating_add(input.cursor_display_column())
            .min(inner.x + inner.width - 1);
        f.set_cursor(x, inner.y);
    }
}

fn render_status_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    f.render_widget(Clear, area);
    let hint_key = if app.route.is_admin() {
        "status.admin_hint"
    } else {
        "status.public_hint"
    };
    let hint = app.locale.text(hint_key).into_owned();
    let message = format!(" {}", app.status_message);

    let segments = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(cell_width(&hint).saturating_add(1).min(area.width / 2)),
        ])
        .split(area);
    f.render_widget(
        Paragraph::new(message).style(Style::default().fg(BAR_TEXT).bg(BAR_BG)),
        segments[0],
    );
    f.render_widget(
        Paragraph::new(hint)
            .alignment(Alignment::Right)
            .style(Style::default().fg(BAR_TEXT).bg(BAR_BG)),
        segments[1],
    );
}
