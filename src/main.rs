use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc;

use omikuji::{
    config::{self, Config},
    key_handlers::{handle_draw_input, handle_login_input, handle_quit_confirm_input},
    logging,
    session::Session,
    spin::{Clock, SystemClock},
    store::{FileStore, MemoryStore, Store},
    ui::ui,
    App, AppScreen,
};

/// Enum for different types of events.
enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::initialize_config()?;
    let config = config::get_config();

    let _logger = logging::init_logging(&config.log_level, &log_dir(&config))?;

    let store = open_store(&config);
    let session = Session::new(store, config.history_capacity)?;
    let app = App::new(session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(
        &mut terminal,
        app,
        Duration::from_millis(config.tick_rate_ms),
    )
    .await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn log_dir(config: &Config) -> PathBuf {
    config
        .data_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|dir| dir.join("omikuji")))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn open_store(config: &Config) -> Box<dyn Store> {
    let result = match &config.data_dir {
        Some(dir) => FileStore::open(dir.clone()),
        None => FileStore::open_default(),
    };
    match result {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("storage unavailable, history will not survive this session: {e}");
            Box::new(MemoryStore::new())
        }
    }
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Spawn a task to read user input and emit ticks
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            if event::poll(tick_rate).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if tx.send(Event::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    let clock = SystemClock;

    loop {
        terminal.draw(|f| ui(f, &app))?;

        match rx.recv().await {
            Some(Event::Input(CEvent::Key(key))) => {
                let now = clock.now();
                match app.screen {
                    AppScreen::Draw => handle_draw_input(key, &mut app, now),
                    AppScreen::Login => handle_login_input(key, &mut app, now),
                    AppScreen::QuitConfirm => handle_quit_confirm_input(key, &mut app),
                    AppScreen::Quit => {}
                }
            }
            Some(Event::Input(_)) => {}
            Some(Event::Tick) => app.on_tick(clock.now()),
            None => break,
        }

        if app.screen == AppScreen::Quit {
            break;
        }
    }

    Ok(())
}
