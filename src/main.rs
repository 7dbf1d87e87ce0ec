use std::path::PathBuf;

use clap::Parser;

use matsub::config::Config;
use matsub::logging::init_tracing;
use matsub::ui::runtime;

#[derive(Parser)]
#[command(name = "matsub", version, about = "Panel de materiales sustitutos")]
struct Args {
    /// Path to the config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match args.config {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            // Fatal: reported before the terminal enters raw mode.
            eprintln!("matsub: {}", err);
            std::process::exit(1);
        }
    };

    runtime::run(config)
}
