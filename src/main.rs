use accessormap::cli::{Cli, Commands};
use accessormap::commands::scan::{handle_scan, ScanCommand};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Scan {
            path,
            format,
            output,
            config,
            jobs,
            all,
        } => handle_scan(ScanCommand {
            path,
            format,
            output,
            config,
            jobs,
            all,
        }),
        Commands::Check { file, method } => {
            let is_accessor = accessormap::commands::check::check_method(&file, &method)?;
            println!("{}", is_accessor);
            Ok(())
        }
        Commands::Init { force } => accessormap::commands::init::init_config(force),
    }
}

/// `RUST_LOG` wins over the `-v` count
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
