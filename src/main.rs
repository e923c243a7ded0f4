//! product-photos: browse a remote product listing in the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌───────────┐ fetch_listing ┌───────────────┐ status/items ┌──────────┐ draw() ┌──────────┐
//! │ source/   │ ◄──────────── │ controller.rs │ ───────────► │  app.rs  │ ─────► │  ui.rs   │
//! │ (HTTP)    │   (one call)  │ (tokio task)  │ (observable) │ (state)  │        │ (render) │
//! └───────────┘               └───────────────┘              └──────────┘        └──────────┘
//!                                                                  ▲
//!                                                                  │ handle_key_event()
//!                                                             ┌──────────┐
//!                                                             │ input.rs │
//!                                                             └──────────┘
//! ```
//!
//! * **`source/`**: the `ListingSource` trait, `FetchError`, the listing
//!   types, and the HTTP implementation.
//! * **`observable`**: latest-value cells with a private writer.
//! * **`controller`**: starts the single fetch and publishes its outcome.
//! * **`app`**: presentation state (observable views, scroll position).
//! * **`ui`**: pure rendering per listing status.
//! * **`input`**: maps key events to `App` mutations.
//! * **`config`** / **`logging`**: runtime settings and the log file.
//! * **`main`**: wires everything together and runs the event loop, which
//!   redraws on key events and once more when the listing settles.

mod app;
mod config;
mod controller;
mod input;
mod logging;
mod observable;
mod source;
mod ui;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use app::App;
use config::Config;
use controller::ListingController;
use source::HttpSource;

// ---------------------------------------------------------------------------
// RAII terminal guard
// ---------------------------------------------------------------------------

/// Enters raw mode and the alternate screen on construction and restores the
/// terminal on [`Drop`], including during unwinding.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Restore the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Redraw, then sleep until either a terminal event arrives or the listing
/// settles.  No timer: nothing is drawn unless something happened.
async fn run(
    guard: &mut TerminalGuard,
    app: &mut App,
    controller: &ListingController,
) -> Result<()> {
    let mut events = EventStream::new();
    let settled = controller.settled();
    tokio::pin!(settled);
    let mut pending = true;

    loop {
        app.sync_selection();
        guard.terminal.draw(|f| ui::draw(app, f))?;

        if app.quit {
            break;
        }

        tokio::select! {
            outcome = &mut settled, if pending => {
                pending = false;
                info!(status = ?outcome, items = app.item_count(), "listing settled");
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => input::handle_key_event(app, key),
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load();
    logging::init(&config.log_file)?;
    install_panic_hook();

    info!(url = %config.api_url, log_file = %config.log_file.display(), "starting");

    let source = Arc::new(HttpSource::new(&config.api_url)?);
    info!(source = source.url(), "using listing source");
    let controller = ListingController::start(source);

    // `guard` restores the terminal when it goes out of scope.
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(controller.status(), controller.items());
    run(&mut guard, &mut app, &controller).await?;

    info!(status = ?app.current_status(), "exiting");
    Ok(())
}
