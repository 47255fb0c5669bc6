use clap::Parser;
use log::Level;

use glyphcast::cli::{self, Args, CliError, Command};
use glyphcast::config::Config;

/// Map `-v` occurrences to a log level
fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Some(Command::ListCharsets) => {
            cli::list_charsets(&mut stdout)?;
            Ok(())
        }
        Some(Command::Config { ref action }) => {
            cli::handle_config_action(action.clone(), args.config.as_deref(), &mut stdout)
        }
        None => {
            let config = Config::load(args.config.as_deref())?;
            cli::render_image(&args, &config, &mut stdout)
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = simple_logger::init_with_level(log_level(args.verbose)) {
        eprintln!("Warning: failed to initialize logger: {}", e);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
