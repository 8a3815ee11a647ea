use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use rolo::app::{
    config::Config, logging::init_tracing, r#loop::run_loop, shared::SharedState,
    state::AppState,
};
use rolo::infrastructure::local_directory::LocalDirectory;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        tracing::error!(%panic_info, "panicked");
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    // Everything that can fail on bad config runs before raw mode
    let config = Config::load()?;
    init_tracing(&config)?;
    setup_panic_hook();

    let adapter = Arc::new(LocalDirectory::open(config.data_file())?);
    let shared = SharedState::new(config.session.clone());
    let app_state = AppState::new(&config, shared);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, adapter).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "exited with error");
        println!("{:?}", err);
    }

    Ok(())
}
