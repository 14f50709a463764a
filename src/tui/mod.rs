pub mod input;
pub mod status;
pub mod ui;
pub mod utils;

use anyhow::Result;
use clap::ArgMatches;
use parking_lot::RwLock;
use std::{io, path::PathBuf, sync::Arc, thread, time::Duration};

use ratatui::{backend::CrosstermBackend, prelude::*};

use crate::core::{document, persistence};
use crate::tui::status::{init_status, read_status, set_error, write_status, Status};
use crate::tui::utils::bus::{Bus, CoreToUi, UiToCore};

// Re-export Page for convenience since it's used throughout TUI code
pub use status::Page;

pub fn start(matches: &ArgMatches) -> Result<()> {
    log::info!("[TUI] helpdeck TUI starting...");

    persistence::set_no_cache(matches.get_flag("no-page-cache"));

    // Activate theme overrides before any block is created
    match crate::core::style::default_theme_path() {
        Ok(theme_path) => crate::core::style::init_theme(&theme_path),
        Err(err) => log::warn!("Theme lookup skipped: {err}"),
    }

    let page_path: PathBuf = match matches.get_one::<String>("page") {
        Some(path) => PathBuf::from(path),
        None => persistence::default_page_path()?,
    };

    let app = Arc::new(RwLock::new(Status::default()));
    init_status(app)?;

    // Load the saved page, falling back to the starter layout on a fresh run.
    let content = match persistence::load_page(&page_path) {
        Ok(Some(page)) => page,
        Ok(None) => document::starter_page(),
        Err(err) => {
            log::warn!("Failed to load saved page, using the starter layout: {err}");
            document::starter_page()
        }
    };
    write_status(|status| {
        status.document.content = content.clone();
        status.document.path = page_path.display().to_string();
        Ok(())
    })?;

    let (ui_tx, ui_rx) = flume::unbounded::<UiToCore>();
    let (core_tx, core_rx) = flume::unbounded::<CoreToUi>();
    let bus = Bus::new(core_rx, ui_tx);

    // Core worker thread: persistence and refresh acknowledgements live off
    // the UI thread so drawing never blocks on disk.
    let core_page_path = page_path.clone();
    let core_handle = thread::spawn(move || core_loop(&ui_rx, &core_tx, &core_page_path));

    // Setup terminal
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &bus);

    // Restore terminal
    crossterm::terminal::disable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = crossterm::execute!(
        stdout,
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    ) {
        log::error!("[TUI] failed to restore terminal: {err}");
    }

    // Make sure the core thread winds down even on an error path.
    let _ = bus.ui_tx.send(UiToCore::Quit);
    drop(bus);
    if core_handle.join().is_err() {
        log::error!("[TUI] core thread panicked");
    }

    res
}

fn core_loop(
    ui_rx: &flume::Receiver<UiToCore>,
    core_tx: &flume::Sender<CoreToUi>,
    page_path: &std::path::Path,
) {
    loop {
        match ui_rx.recv() {
            Ok(UiToCore::Refresh) => {
                let _ = core_tx.send(CoreToUi::Refreshed);
            }
            Ok(UiToCore::SavePage) => {
                let result = read_status(|status| Ok(status.document.content.clone()))
                    .and_then(|content| persistence::save_page(page_path, &content));
                match result {
                    Ok(()) => {
                        if let Err(err) = write_status(|status| {
                            status.document.dirty = false;
                            Ok(())
                        }) {
                            log::error!("[TUI] failed to clear dirty flag after save: {err}");
                        }
                        log::info!("💾 Page saved to {page_path:?}");
                        let _ = core_tx.send(CoreToUi::Refreshed);
                    }
                    Err(err) => {
                        set_error(format!("Save failed: {err}"));
                        let _ = core_tx.send(CoreToUi::Error);
                    }
                }
            }
            Ok(UiToCore::Quit) => {
                if let Err(err) = write_status(|status| {
                    status.temporarily.should_quit = true;
                    Ok(())
                }) {
                    log::error!("[TUI] failed to set quit flag: {err}");
                }
                let _ = core_tx.send(CoreToUi::Tick);
                break;
            }
            Err(_) => break, // UI side hung up
        }
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, bus: &Bus) -> Result<()> {
    loop {
        // Draw from a snapshot so no lock is held while rendering.
        let snapshot = read_status(|status| Ok(status.clone()))?;
        if snapshot.temporarily.should_quit {
            break;
        }
        terminal.draw(|frame| ui::render_ui(frame, &snapshot))?;

        // Poll for input
        if crossterm::event::poll(Duration::from_millis(200))? {
            match crossterm::event::read() {
                Ok(event) => {
                    if let Err(err) = input::handle_event(event, bus) {
                        log::warn!("[TUI] input handling failed: {err}");
                        set_error(format!("input error: {err}"));
                    }
                }
                Err(err) => {
                    set_error(format!("input read error: {err}"));
                }
            }
        }

        // Drain core acknowledgements; the next iteration redraws anyway.
        while bus.core_rx.try_recv().is_ok() {}
    }

    terminal.clear()?;
    Ok(())
}
