use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::{App, Route};
use crate::config::AppConfig;
use crate::i18n::Language;
use crate::pages::{AdminScreen, AdminSection};
use crate::public::PublicPage;
use crate::records::CollectionStore;
use crate::session::SimulatedAuthenticator;

pub(crate) fn test_app() -> App {
    let authenticator = Arc::new(SimulatedAuthenticator::new(Duration::from_millis(5)));
    App::new(&AppConfig::default(), authenticator).unwrap()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, ch: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

async fn settle(app: &mut App) {
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        app.on_tick();
        if !app.login.is_pending() {
            return;
        }
    }
}

#[test]
fn starts_signed_out_on_home() {
    let app = test_app();
    assert_eq!(app.route, Route::Public(PublicPage::Home));
    assert!(!app.session.is_authenticated());
    assert_eq!(app.locale.language(), Language::En);
}

#[test]
fn backoffice_without_session_lands_on_login() {
    let mut app = test_app();
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.route, Route::Login);
    app.navigate(Route::Admin(AdminSection::Products));
    assert_eq!(app.route, Route::Login);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.route, Route::Public(PublicPage::Home));
}

#[test]
fn signed_in_login_route_goes_to_dashboard() {
    let mut app = test_app();
    app.session.login();
    app.navigate(Route::Login);
    assert_eq!(app.route, Route::Admin(AdminSection::Dashboard));
}

#[test]
fn tab_walks_public_pages_and_language_cycles() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.route, Route::Public(PublicPage::Products));
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.route, Route::Public(PublicPage::Contact));

    ctrl(&mut app, 'l');
    assert_eq!(app.locale.language(), Language::Pt);
    assert!(app.status_message.contains(Language::Pt.label()));
}

#[test]
fn quit_shortcut_sets_flag() {
    let mut app = test_app();
    ctrl(&mut app, 'q');
    assert!(app.should_quit);
}

#[test]
fn newsletter_sign_up_adds_a_lead() {
    let mut app = test_app();
    let before = app.admin.leads.len();
    press(&mut app, KeyCode::Char('n'));
    assert!(!app.newsletter.is_open(), "only the contact page offers sign-up");

    app.navigate(Route::Public(PublicPage::Contact));
    press(&mut app, KeyCode::Char('n'));
    assert!(app.newsletter.is_open());
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.route, Route::Public(PublicPage::Contact));
    type_text(&mut app, "leitor@example.com");
    press(&mut app, KeyCode::Enter);

    assert!(!app.newsletter.is_open());
    assert_eq!(app.admin.leads.len(), before + 1);
    assert_eq!(app.admin.leads.collection().rows()[0].email, "leitor@example.com");
    assert_eq!(app.status_message, "Thanks! You are subscribed.");
}

#[tokio::test]
async fn login_flow_opens_the_backoffice() {
    let mut app = test_app();
    press(&mut app, KeyCode::F(2));
    type_text(&mut app, "operador");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "senha");
    press(&mut app, KeyCode::Enter);
    assert!(app.login.is_pending());
    assert!(!app.session.is_authenticated());

    settle(&mut app).await;

    assert!(app.session.is_authenticated());
    assert_eq!(app.route, Route::Admin(AdminSection::Dashboard));
    assert!(app.login.username.is_blank());

    ctrl(&mut app, 'o');
    assert!(!app.session.is_authenticated());
    assert_eq!(app.route, Route::Login);
}

#[tokio::test]
async fn blank_credentials_are_rejected() {
    let mut app = test_app();
    app.navigate(Route::Login);
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;
    assert!(!app.session.is_authenticated());
    assert_eq!(app.route, Route::Login);
    assert!(app.login.error.is_some());
}

#[tokio::test]
async fn leaving_login_discards_the_pending_result() {
    let mut app = test_app();
    app.navigate(Route::Login);
    type_text(&mut app, "operador");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "senha");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert!(!app.login.is_pending());

    tokio::time::sleep(Duration::from_millis(30)).await;
    app.on_tick();
    assert!(!app.session.is_authenticated());
    assert_eq!(app.route, Route::Public(PublicPage::Home));
}

#[test]
fn admin_keys_switch_sections_and_edit_collections() {
    let mut app = test_app();
    app.session.login();
    app.navigate(Route::Admin(AdminSection::Dashboard));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.route, Route::Admin(AdminSection::Products));

    let before = app.admin.products.len();
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.admin.products.len(), before - 1);
    assert_eq!(app.status_message, "Record deleted");

    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Right);
    assert_eq!(app.route, Route::Admin(AdminSection::Products));
}

#[test]
fn leads_only_grow_through_the_newsletter() {
    let mut app = test_app();
    app.session.login();
    app.navigate(Route::Admin(AdminSection::Leads));
    let before = app.admin.leads.len();
    press(&mut app, KeyCode::Char('n'));
    assert!(!app.admin.leads.page().is_open());
    ctrl(&mut app, 's');
    assert_eq!(app.admin.leads.len(), before);
}

#[test]
fn blank_required_field_is_reported_in_status() {
    let mut app = test_app();
    app.session.login();
    app.navigate(Route::Admin(AdminSection::Faq));
    press(&mut app, KeyCode::Char('n'));
    ctrl(&mut app, 's');
    assert!(app.status_message.contains("Pergunta"));
    assert!(app.admin.faq.page().is_open());
}

#[test]
fn clicks_on_registered_targets_navigate() {
    let mut app = test_app();
    app.hits.clear(Rect::new(0, 0, 100, 30));
    app.hits.register(Route::Public(PublicPage::About), Rect::new(20, 0, 7, 1));
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 22,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(click);
    assert_eq!(app.route, Route::Public(PublicPage::About));
}
