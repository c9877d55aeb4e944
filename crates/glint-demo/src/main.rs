use std::path::PathBuf;

use clap::Parser;
use glint_engine::device::ContextInit;
use glint_engine::logging::{init_logging, LoggingConfig};
use glint_engine::window::{Runtime, RuntimeConfig};

mod scene;

use scene::QuadApp;

const DEFAULT_SHADER: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/res/basic.shader");

/// Draws a quad whose red channel pulses every frame.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Shader resource with `#shader vertex` / `#shader fragment` sections.
    #[arg(long, default_value = DEFAULT_SHADER)]
    shader: PathBuf,

    /// Log filter in env_logger syntax (e.g. "debug", "glint_engine=trace").
    #[arg(long)]
    log: Option<String>,

    /// Present frames as fast as possible instead of waiting for vblank.
    #[arg(long)]
    no_vsync: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    let init = ContextInit {
        vsync: !args.no_vsync,
        ..ContextInit::default()
    };

    log::info!("shader resource: {}", args.shader.display());
    Runtime::run(RuntimeConfig::default(), init, QuadApp::new(args.shader))
}
