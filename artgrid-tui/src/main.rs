//! artgrid entry point.

use artgrid_core::ArtworkSource;
use artgrid_tui::api_client::RestClient;
use artgrid_tui::config::TuiConfig;
use artgrid_tui::error::TuiError;
use artgrid_tui::events::TuiEvent;
use artgrid_tui::keys::{map_key, Action};
use artgrid_tui::loader::spawn_fetch;
use artgrid_tui::logging;
use artgrid_tui::state::{App, Effect};
use artgrid_tui::views::render_view;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    logging::init(&config.log_path)?;
    tracing::info!(api = %config.api_base_url, "starting artgrid");

    let source: Arc<dyn ArtworkSource> = Arc::new(RestClient::new(&config)?);
    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let effect = app.mount();
    run_effect(effect, &source, &event_tx);

    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {}
            Some(event) = event_rx.recv() => {
                let effect = handle_event(&mut app, event);
                if effect == Effect::Quit {
                    break;
                }
                run_effect(effect, &source, &event_tx);
            }
        }
    }

    tracing::info!(selected = app.browser.selection.len(), "exiting artgrid");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let forwarded = match evt {
                    CrosstermEvent::Key(key) => Some(TuiEvent::Input(key)),
                    CrosstermEvent::Mouse(mouse) => Some(TuiEvent::Mouse(mouse)),
                    CrosstermEvent::Resize(width, height) => {
                        Some(TuiEvent::Resize { width, height })
                    }
                    _ => None,
                };
                if let Some(event) = forwarded {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

fn handle_event(app: &mut App, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Input(key) => match map_key(key, app.input_mode()) {
            Some(action) => app.handle_action(action),
            None => Effect::None,
        },
        TuiEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => app.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => app.handle_action(Action::MoveDown),
            MouseEventKind::ScrollUp => app.handle_action(Action::MoveUp),
            _ => Effect::None,
        },
        TuiEvent::Resize { width, height } => {
            app.resize(width, height);
            Effect::None
        }
        TuiEvent::PageLoaded { ticket, result } => app.apply_page_loaded(ticket, result),
    }
}

fn run_effect(effect: Effect, source: &Arc<dyn ArtworkSource>, sender: &mpsc::Sender<TuiEvent>) {
    if let Effect::Fetch(request) = effect {
        spawn_fetch(source.clone(), request, sender.clone());
    }
}
