use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;

use super::{App, HitRegistry, LoginState, Route};
use crate::config::AppConfig;
use crate::i18n::LocaleStore;
use crate::pages::{AdminPages, SeedData};
use crate::public::Newsletter;
use crate::session::{Authenticator, SessionStore};

impl App {
    /// Builds the application state from configuration and the bundled
    /// dictionaries and seed collections.
    pub fn new(config: &AppConfig, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        let language = config.language();
        debug!("Initializing App with default language {}", language.code());

        let locale = LocaleStore::bundled(language).context("loading bundled dictionaries")?;
        let seed = SeedData::bundled().context("loading bundled seed data")?;
        let status_message = locale.text("status.public_hint").into_owned();

        Ok(Self {
            should_quit: false,
            route: Route::default(),
            locale,
            session: SessionStore::new(),
            admin: AdminPages::from_seed(seed),
            login: LoginState::new(),
            newsletter: Newsletter::new(),
            status_message,
            hits: HitRegistry::default(),
            authenticator,
        })
    }
}
