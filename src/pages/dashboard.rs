use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{AdminPages, AdminSection};
use crate::i18n::LocaleStore;
use crate::ui::theme::*;

/// Record totals per section.
pub fn render_dashboard(f: &mut Frame<'_>, area: Rect, pages: &AdminPages, locale: &LocaleStore) {
    let unit = locale.text("admin.dashboard.records");
    let lines: Vec<Line> = AdminSection::ALL
        .iter()
        .filter_map(|section| pages.count(*section).map(|count| (section, count)))
        .map(|(section, count)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<24}", locale.text(section.title_key())),
                    Style::default().fg(FG_PRIMARY),
                ),
                Span::styled(
                    format!("{count:>4} "),
                    Style::default().fg(BORDER_FOCUS).add_modifier(Modifier::BOLD),
                ),
                Span::styled(unit.to_string(), Style::default().fg(FG_DIM)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(locale.text("admin.dashboard.title").into_owned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_IDLE))
        .style(Style::default().bg(BG_PANEL));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tests::buffer_text;
    use crate::i18n::Language;
    use crate::pages::SeedData;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn dashboard_lists_counts_in_active_language() {
        let mut locale = LocaleStore::bundled(Language::En).unwrap();
        locale.set_language(Language::Pt);
        let pages = AdminPages::from_seed(SeedData::bundled().unwrap());
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_dashboard(f, area, &pages, &locale);
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(locale.text("admin.sections.products").as_ref()));
        assert!(text.contains("   5 "));
    }
}
