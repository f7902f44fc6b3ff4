mod app;
mod components;
mod config;
mod event;
mod i18n;
mod logging;
mod pages;
mod public;
mod records;
mod session;
mod tui;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::EventStream;
use futures_util::StreamExt;
use log::{error, info};

use app::App;
use config::AppConfig;
use event::Event;
use session::SimulatedAuthenticator;
use tui::Tui;

const MIN_TICK_MS: u64 = 16;

#[tokio::main]
async fn main() -> Result<()> {
    let root = std::env::current_dir().context("resolving working directory")?;
    let config = AppConfig::load(&root).context("loading configuration")?;
    logging::init(&root, &config)?;
    info!("Starting vitrine with default language {}", config.default_language);

    let authenticator = Arc::new(SimulatedAuthenticator::new(Duration::from_millis(
        config.login_delay_ms,
    )));
    let mut app = App::new(&config, authenticator)?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(MIN_TICK_MS));

    let mut terminal = tui::init().context("initializing terminal")?;
    let result = run(&mut terminal, &mut app, tick_rate).await;
    tui::restore().context("restoring terminal")?;
    if let Err(err) = &result {
        error!("Exited with error: {err:#}");
    } else {
        info!("Exited normally");
    }
    result
}

async fn run(terminal: &mut Tui, app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(tick_rate);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(raw)) => match Event::from_crossterm(raw) {
                        Some(event) => event,
                        None => continue,
                    },
                    Some(Err(err)) => return Err(err).context("reading terminal events"),
                    None => break,
                }
            }
        };

        match event {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize => {}
        }
    }
    Ok(())
}
