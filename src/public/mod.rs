//! Public site: static content pages read from the active dictionary, plus the
//! newsletter sign-up on the contact page.

mod newsletter;

pub use newsletter::{Newsletter, NewsletterOutcome};

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::i18n::LocaleStore;
use crate::ui::theme::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicPage {
    Home,
    Products,
    Services,
    About,
    Faq,
    Blog,
    Contact,
}

impl PublicPage {
    pub const ALL: [PublicPage; 7] = [
        PublicPage::Home,
        PublicPage::Products,
        PublicPage::Services,
        PublicPage::About,
        PublicPage::Faq,
        PublicPage::Blog,
        PublicPage::Contact,
    ];

    fn slug(&self) -> &'static str {
        match self {
            PublicPage::Home => "home",
            PublicPage::Products => "products",
            PublicPage::Services => "services",
            PublicPage::About => "about",
            PublicPage::Faq => "faq",
            PublicPage::Blog => "blog",
            PublicPage::Contact => "contact",
        }
    }

    /// Dictionary key of the navigation label.
    pub fn nav_key(&self) -> String {
        format!("nav.{}", self.slug())
    }

    /// Dictionary prefix holding `title`, `body` and `items`.
    pub fn content_key(&self) -> String {
        format!("pages.{}", self.slug())
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|page| page == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub fn render_public(f: &mut Frame<'_>, area: Rect, page: PublicPage, locale: &LocaleStore) {
    let prefix = page.content_key();
    let title_key = format!("{prefix}.title");
    let body_key = format!("{prefix}.body");
    let items = locale.items(&format!("{prefix}.items"));

    let prompt = page == PublicPage::Contact;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(if prompt { 3 } else { 0 }),
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            locale.text(&title_key).into_owned(),
            Style::default().fg(BORDER_FOCUS).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            locale.text(&body_key).into_owned(),
            Style::default().fg(FG_PRIMARY),
        )),
    ])
    .wrap(Wrap { trim: true })
    .style(Style::default().bg(BG_PRIMARY));
    f.render_widget(hero, chunks[0]);

    let mut lines = Vec::with_capacity(items.len() * 3);
    for item in &items {
        if let Some(title) = item.get("title") {
            lines.push(Line::from(Span::styled(
                format!("▸ {title}"),
                Style::default().fg(BAR_TEXT).add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(text) = item.get("text") {
            lines.push(Line::from(Span::styled(
                format!("  {text}"),
                Style::default().fg(FG_PRIMARY),
            )));
        }
        lines.push(Line::default());
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_IDLE))
        .style(Style::default().bg(BG_PANEL));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        chunks[1],
    );

    if prompt {
        let cta = Paragraph::new(locale.text("newsletter.prompt").into_owned())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER_FOCUS)),
            )
            .style(Style::default().fg(BAR_TEXT).bg(BG_PANEL));
        f.render_widget(cta, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tests::buffer_text;
    use crate::i18n::Language;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(page: PublicPage, language: Language) -> String {
        let mut locale = LocaleStore::bundled(Language::En).unwrap();
        locale.set_language(language);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_public(f, area, page, &locale);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn pages_cycle_through_all_sections() {
        let mut page = PublicPage::Home;
        for _ in 0..PublicPage::ALL.len() {
            page = page.next();
        }
        assert_eq!(page, PublicPage::Home);
        assert_eq!(PublicPage::Home.previous(), PublicPage::Contact);
    }

    #[test]
    fn every_page_has_content_in_every_language() {
        let locale = LocaleStore::bundled(Language::En).unwrap();
        for page in PublicPage::ALL {
            let title = format!("{}.title", page.content_key());
            assert_ne!(locale.text(&title), title);
            assert!(!locale.items(&format!("{}.items", page.content_key())).is_empty());
            assert_ne!(locale.text(&page.nav_key()), page.nav_key());
        }
    }

    #[test]
    fn faq_page_renders_items() {
        let text = draw(PublicPage::Faq, Language::En);
        assert!(text.contains("Frequently asked questions"));
        assert!(text.contains("Do you ship nationwide?"));
        assert!(!text.contains("newsletter"));
    }

    #[test]
    fn contact_page_offers_the_newsletter() {
        let text = draw(PublicPage::Contact, Language::En);
        assert!(text.contains("Press N to join our newsletter"));
    }
}
