//! Lissajous library crate
//!
//! Core functionality for the `lissajous` and `echo` binaries, split into
//! small modules: `palette` (the fixed color table), `raster` (curve
//! rasterization into palette-indexed frames), `animation` (frame assembly and
//! GIF encoding), `server` (web mode) and `echo` (the argument reporter).
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the `lissajous` binary.
//! - `animation::lissajous()` — render one animated GIF into any writer.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod animation;
pub mod echo;
pub mod error;
pub mod palette;
pub mod raster;
pub mod server;

use std::io::Write;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::animation::{DEFAULT_CYCLES, lissajous};
use crate::server::{DEFAULT_ADDR, ServerState};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate animated GIFs of random Lissajous figures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of complete x oscillator revolutions
    #[arg(long = "cycles", default_value_t = DEFAULT_CYCLES, allow_negative_numbers = true)]
    cycles: i64,

    /// Seed the random generator for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve a freshly generated animation on every request (`/?cycles=N`)
    Web {
        /// Address to listen on
        #[arg(long = "addr", default_value = DEFAULT_ADDR)]
        addr: String,
    },
}

/// Log to stderr so stdout only ever carries GIF bytes.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the Lissajous CLI.
///
/// Behavior summary:
/// - no subcommand — write one animation to stdout. Encoding errors are
///   logged and otherwise ignored.
/// - `web` — start the HTTP listener. Failing to bind is returned as an
///   error, which terminates the binary.
///
/// Example:
///
/// ```no_run
/// lissajous_lib::run().unwrap(); // called from src/main.rs
/// ```
pub fn run() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        None => {
            let mut rng = match cli.seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let mut out = std::io::stdout().lock();
            if let Err(e) = lissajous(&mut out, cli.cycles, &mut rng) {
                error!("failed to encode animation: {}", e);
            }
            let _ = out.flush();
            Ok(())
        }
        Some(Commands::Web { addr }) => {
            let runtime = tokio::runtime::Runtime::new()?;
            info!("starting web mode on {}", addr);
            runtime.block_on(server::serve(&addr, ServerState { seed: cli.seed }))?;
            Ok(())
        }
    }
}
