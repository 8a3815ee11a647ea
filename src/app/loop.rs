use crate::app::{
    action::Action,
    command::Command,
    input::map_event_to_action,
    reducer,
    state::{AppState, ErrorSeverity, ErrorState},
    ui,
};
use crate::domain::crm::CrmFacade;

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(500);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    adapter: Arc<dyn CrmFacade>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, adapter, event_rx).await
}

/// Watches the data file's directory; editors often replace the file
/// instead of writing it in place.
fn watch_data_source(
    path: &Path,
    action_tx: mpsc::Sender<Action>,
) -> notify::Result<RecommendedWatcher> {
    let file_name = path.file_name().map(std::ffi::OsStr::to_os_string);
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };

    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let touches_file = event
                .paths
                .iter()
                .any(|p| p.file_name().map(std::ffi::OsStr::to_os_string) == file_name);
            if touches_file {
                let _ = notify_tx.try_send(());
            }
        }
    })?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    tokio::spawn(async move {
        let mut pending = false;
        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(RELOAD_DEBOUNCE) => {
                        let _ = action_tx.send(Action::DataSourceChanged).await;
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    Ok(watcher)
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    adapter: Arc<dyn CrmFacade>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Data Source Watcher (dropped, and so stopped, when the loop returns)
    let _watcher = match adapter.source_path() {
        Some(path) => match watch_data_source(&path, action_tx.clone()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot watch data file");
                app_state.last_error = Some(ErrorState::new(
                    format!("Not watching {}: {e}", path.display()),
                    ErrorSeverity::Warning,
                ));
                None
            }
        },
        None => None,
    };

    // Session
    let mut token_rx = app_state.shared.token_pair.subscribe();
    if let Some(cmd) = reducer::update(&mut app_state, Action::SessionChanged) {
        handle_command(cmd, adapter.clone(), action_tx.clone())?;
    }

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Token slot written by the host
            Ok(()) = token_rx.changed() => Some(Action::SessionChanged),

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, adapter.clone(), action_tx.clone())?;
            }
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    adapter: Arc<dyn CrmFacade>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    crate::app::features::remote::handle_command(command, adapter, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
