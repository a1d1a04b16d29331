//! Tray Timer - a countdown timer living in the menu bar
//!
//! The title counts the configured interval down, a notification fires when
//! it runs out and the menu offers Restart, Stop, Continue and a counter of
//! completed intervals.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tokio::sync::mpsc;

use traytimer::cli::{Cli, Display, USAGE_EXIT_CODE};
use traytimer::config::TimerConfig;
use traytimer::daemon;
use traytimer::menubar::{self, MenuAction, MenuBuilder, TrayHandle, TrayIconManager};
use traytimer::notification::DesktopNotifier;

/// Main entry point
fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    let config = match TimerConfig::try_from(&cli) {
        Ok(config) => config,
        Err(e) => {
            Display::show_config_error(&e);
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    if let Err(e) = execute(config) {
        Display::show_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they never mix with the console status line.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Starts the background tasks and hands the main thread to the tray.
fn execute(config: TimerConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("traytimer-worker")
        .build()
        .context("failed to start async runtime")?;

    let (update_tx, update_rx) = crossbeam_channel::unbounded();
    let tray = TrayHandle::new(update_tx);
    let menu_config = MenuBuilder::new().build(&config);
    let manager = TrayIconManager::new(update_rx);

    let (action_tx, action_rx) = mpsc::unbounded_channel();

    let daemon_handle = runtime.spawn(daemon::run(
        config,
        tray.clone(),
        tray,
        DesktopNotifier::new(),
        action_rx,
    ));

    let signal_tx = action_tx.clone();
    runtime.spawn(async move {
        let signal = wait_for_signal().await;
        tracing::info!(signal, "received signal, quitting");
        if signal_tx.send(MenuAction::Quit).is_err() {
            tracing::debug!("menu controller already stopped");
        }
    });

    menubar::run_front_end(manager, menu_config, action_tx)?;

    runtime
        .block_on(daemon_handle)
        .context("timer task panicked")?
}

/// Completes on Ctrl-C or, on Unix, SIGTERM. Returns the signal name.
///
/// A signal that cannot be listened for never completes.
async fn wait_for_signal() -> &'static str {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
