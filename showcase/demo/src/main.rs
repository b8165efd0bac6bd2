//! Showcase Demo - Terminal Driver for the Showcase Animator
//!
//! Mounts the showcase against a catalog, prints every projection it
//! publishes, and replays a script of card clicks.
//!
//! # Usage
//!
//! ```bash
//! # Type out the first card and exit
//! showcase-demo
//!
//! # Click "Onboard" after 3s, change our mind 200ms later
//! showcase-demo --click 1@3000 --click 2@3200
//!
//! # Machine-readable output with reduced motion
//! showcase-demo --json --motion reduced --click 3@1s
//!
//! # Custom catalog and verbose logging
//! RUST_LOG=showcase_core=trace showcase-demo --catalog cards.toml
//! ```
//!
//! # Signals
//!
//! - `SIGTERM` / `SIGINT`: tear the showcase down and exit

mod render;
mod script;

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use showcase_core::{
    default_config_path, load_config_from_path, ConfigOverrides, MotionPreference, Phase,
    SelectOutcome, ShowcaseEvent, TransitionCoordinator,
};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;
use tracing::{debug, info, warn};

use render::{OutputMode, Renderer};
use script::{Click, ClickScript};

/// Showcase Demo - drive the use-case showcase from a terminal
#[derive(Parser, Debug)]
#[command(name = "showcase-demo")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "SHOWCASE_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog file (TOML or JSON)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Click card INDEX at OFFSET after start (repeatable)
    #[arg(long = "click", value_name = "INDEX@OFFSET")]
    clicks: Vec<Click>,

    /// Motion preference (full, reduced, none)
    #[arg(short = 'm', long)]
    motion: Option<MotionPreference>,

    /// Settle delay between cards in milliseconds
    #[arg(long, value_name = "MS")]
    settle_ms: Option<u64>,

    /// Print projections as JSON lines
    #[arg(long)]
    json: bool,

    /// Print the coordinator's event feed as JSON lines instead of projections
    #[arg(long, conflicts_with = "json")]
    events: bool,

    /// Card width in columns
    #[arg(short = 'w', long, default_value_t = 72)]
    width: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "SHOWCASE_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

/// Initialize logging with the specified level
///
/// Logs go to stderr so stdout stays clean for projections.
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("showcase_demo={level},showcase_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves when the process is asked to stop
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

/// Write event feed entries as JSON lines
///
/// Returns after writing [`ShowcaseEvent::Disposed`], or once every sender
/// is gone.
async fn print_events<W: Write>(
    mut rx: mpsc::UnboundedReceiver<ShowcaseEvent>,
    mut out: W,
) -> std::io::Result<W> {
    while let Some(event) = rx.recv().await {
        match serde_json::to_string(&event) {
            Ok(line) => {
                writeln!(out, "{line}")?;
                out.flush()?;
            }
            Err(e) => warn!(error = %e, "Failed to encode event"),
        }
        if matches!(event, ShowcaseEvent::Disposed) {
            break;
        }
    }
    Ok(out)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);
    debug!(?args, "Showcase demo starting");

    // Configuration: file, environment, then flags
    if let Some(ref path) = args.config {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    }
    let config_path = args.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(config_path).context("Failed to load configuration")?;

    let mut overrides = ConfigOverrides::new();
    if let Some(ref path) = args.catalog {
        overrides = overrides.with_catalog_path(path.clone());
    }
    if let Some(motion) = args.motion {
        overrides = overrides.with_motion(motion);
    }
    if let Some(ms) = args.settle_ms {
        overrides = overrides.with_settle_ms(ms);
    }
    overrides
        .apply(&mut config)
        .context("Invalid command-line option")?;

    info!(source = %config.source(), motion = %config.motion, "Configuration resolved");

    let catalog = config.load_catalog().context("Failed to load catalog")?;
    for click in &args.clicks {
        if click.index >= catalog.len() {
            warn!(
                index = click.index,
                items = catalog.len(),
                "Scripted click is outside the catalog and will be ignored"
            );
        }
    }

    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let renderer = Renderer::new(&catalog, mode, args.width);
    let redraw = mode == OutputMode::Text && std::io::stdout().is_terminal();

    // Mount
    let mut printer = None;
    let coordinator = if args.events {
        let (tx, rx) = mpsc::unbounded_channel();
        printer = Some(tokio::spawn(print_events(rx, std::io::stdout())));
        TransitionCoordinator::mount_with_events(catalog, config.coordinator_config(), tx)
    } else {
        TransitionCoordinator::mount(catalog, config.coordinator_config())
    }
    .context("Failed to mount showcase")?;

    let mut script = ClickScript::new(args.clicks);
    let mut frames = WatchStream::new(coordinator.subscribe());
    let start = Instant::now();
    let mut last_phase = None;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        let next_click = script.peek().map(|click| start + click.at);

        tokio::select! {
            biased;

            () = &mut shutdown => break,

            Some(projection) = frames.next() => {
                if !args.events {
                    // Off a terminal, only phase boundaries are printed
                    let boundary = last_phase != Some(projection.phase);
                    if mode == OutputMode::Json || redraw || boundary {
                        let out = renderer.render(&projection);
                        let mut stdout = std::io::stdout().lock();
                        if redraw {
                            write!(stdout, "\x1b[2J\x1b[H")?;
                        }
                        writeln!(stdout, "{out}")?;
                        if mode == OutputMode::Text && !redraw {
                            writeln!(stdout)?;
                        }
                        stdout.flush()?;
                    }
                }
                last_phase = Some(projection.phase);

                if script.is_done() && projection.phase == Phase::Idle {
                    break;
                }
            }

            () = tokio::time::sleep_until(next_click.unwrap_or(start)), if next_click.is_some() => {
                if let Some(click) = script.pop() {
                    match coordinator.select_item(click.index) {
                        SelectOutcome::Rejected(reason) => {
                            warn!(index = click.index, %reason, "Scripted click ignored");
                        }
                        outcome => info!(index = click.index, ?outcome, "Scripted click"),
                    }
                }

                if script.is_done() && coordinator.phase() == Phase::Idle {
                    break;
                }
            }
        }
    }

    coordinator.shutdown();
    if let Some(printer) = printer {
        printer
            .await
            .context("Event printer panicked")?
            .context("Failed to write event feed")?;
    }
    info!(
        active = coordinator.active_index(),
        remaining_clicks = script.len(),
        "Showcase demo finished"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_event_printer_stops_after_disposed() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(ShowcaseEvent::PhaseChanged {
            from: Phase::Entering,
            to: Phase::Idle,
            generation: 2,
        })
        .unwrap();
        tx.send(ShowcaseEvent::Disposed).unwrap();
        // Sender stays open: the printer must finish on Disposed alone
        let out = print_events(rx, Vec::new()).await.unwrap();
        drop(tx);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], r#"{"type":"disposed"}"#);
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_feed_ends_with_disposed_after_shutdown() {
        let (tx, rx) = mpsc::unbounded_channel();
        let printer = tokio::spawn(print_events(rx, Vec::new()));
        let coordinator = TransitionCoordinator::mount_with_events(
            showcase_core::Catalog::builtin(),
            showcase_core::CoordinatorConfig::instant(),
            tx,
        )
        .unwrap();

        coordinator.wait_idle().await;
        assert!(coordinator.select_item(1).is_accepted());
        coordinator.wait_idle().await;
        coordinator.shutdown();

        let out = printer.await.unwrap().unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().last(), Some(r#"{"type":"disposed"}"#));
        assert!(text.contains(r#""type":"selection_changed""#));
    }
}
