//! `molview` command-line driver: load a molfile, run the headless scene
//! host for a number of frames, and optionally dump the built group as JSON.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use molview::loader::{self, Source};
use molview::options::{Options, ParseOptions};
use molview::scene::SceneHost;
use molview::MolviewError;

/// Load an MDL molfile and build its ball-and-stick scene.
#[derive(Parser, Debug)]
#[command(name = "molview", version, about)]
struct Cli {
    /// Molfile path or http(s) URL.
    source: String,

    /// TOML options preset.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Number of frames to run the host loop for.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Read malformed numeric fields as NaN/0 instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Print the built molecule group as JSON to stdout.
    #[arg(long)]
    dump_json: bool,
}

const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

fn run(cli: &Cli) -> Result<(), MolviewError> {
    let mut options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if cli.lenient {
        options.parse = ParseOptions::lenient();
    }

    let mut host = SceneHost::new(options, DEFAULT_ASPECT);
    host.begin_load(Source::parse(&cli.source), loader::default_fetcher())?;
    let _ = host.wait_for_load();
    if let Some(e) = host.take_error() {
        return Err(e);
    }

    for _ in 0..cli.frames {
        std::thread::sleep(host.timing().remaining());
        let frame = host.tick();
        log::trace!("frame dt {:.4}s, model {:?}", frame.dt, frame.model);
    }

    let rotation = host.rotation();
    log::info!(
        "ran {} frames at {:.1} fps; rotation y {:.3} rad, z {:.3} rad",
        host.timing().frame_count(),
        host.timing().fps(),
        rotation.x,
        rotation.y
    );

    if cli.dump_json {
        if let Some(group) = host.group() {
            let mut out = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, group)
                .map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
