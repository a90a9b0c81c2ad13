//! Async button demo - main entry point.
//!
//! Loads the button config, binds a simulated network action to an
//! `AsyncButton`, presses it a few times, and logs every state change and
//! feedback intent.
//!
//! Usage: `async-button-demo [path/to/config.toml]`

mod status;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_button_core::{ActionError, ButtonConfig, ConfigError};
use async_button_engine::{AsyncButton, LoggingFeedbackDevice};
use status::{render_feedback, render_status};

/// Presses issued by the demo.
const PRESSES: usize = 5;

/// Time between presses.
const PRESS_INTERVAL: Duration = Duration::from_millis(250);

/// How long the simulated request takes.
const REQUEST_TIME: Duration = Duration::from_millis(400);

// =============================================================================
// Configuration
// =============================================================================

/// Load config from the path given on the command line, or the default
/// location.
fn load_config() -> Result<ButtonConfig, ConfigError> {
    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!("Loading config from {:?}", path);
            ButtonConfig::load(&path)
        }
        None => ButtonConfig::load_or_default(),
    }
}

// =============================================================================
// Simulated Action
// =============================================================================

/// A request that fails on every third attempt.
async fn simulated_request(attempt: usize) -> Result<(), ActionError> {
    tokio::time::sleep(REQUEST_TIME).await;
    if attempt % 3 == 0 {
        let error = std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "The server did not respond",
        );
        return Err(error.into());
    }
    Ok(())
}

// =============================================================================
// Demo Flow
// =============================================================================

async fn run(button: AsyncButton, config: &ButtonConfig) {
    let mut state_rx = button.subscribe();
    tokio::spawn(async move {
        while state_rx.changed().await.is_ok() {
            let line = render_status(&state_rx.borrow_and_update());
            tracing::info!("state: {}", line);
        }
    });

    let mut feedback_rx = button.subscribe_feedback();
    tokio::spawn(async move {
        while let Ok(event) = feedback_rx.recv().await {
            tracing::info!("feedback: {}", render_feedback(&event));
        }
    });

    for press in 1..=PRESSES {
        match button.press() {
            Some(handle) => tracing::info!("Press {} started {}", press, handle.id()),
            None => tracing::info!("Press {} dropped", press),
        }
        tokio::time::sleep(PRESS_INTERVAL).await;
    }

    let mut idle_rx = button.subscribe();
    if idle_rx.wait_for(|state| !state.is_loading).await.is_err() {
        tracing::warn!("State channel closed before operations finished");
        return;
    }

    if button.dismiss_alert() {
        tracing::info!("Alert acknowledged");
    }

    // Let the tint revert play out
    let timing = config.timing;
    tokio::time::sleep(timing.tint_hold() + timing.tint_fade_out()).await;

    let removed = button.tracker().prune_completed();
    tracing::info!(
        "Done: {} ({} completed operations pruned)",
        render_status(&button.state()),
        removed
    );
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Async button demo starting...");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let attempts = Arc::new(AtomicUsize::new(0));
    let button = match AsyncButton::from_config(
        move || simulated_request(attempts.fetch_add(1, Ordering::SeqCst) + 1),
        &config,
        Arc::new(LoggingFeedbackDevice),
    ) {
        Ok(button) => button,
        Err(e) => {
            tracing::error!("Invalid button config: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Options: {:?}, platform: {:?}",
        button.tracker().options(),
        config.platform
    );

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(run(button, &config));
}
