//! Serve command - open the web UI for interactive cleaning.

use colored::Colorize;

use crate::server::{app, state::AppState};

pub fn run(port: u16, no_open: bool, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new();

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting sweeper at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, port))
}
