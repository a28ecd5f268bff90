//! vouch - validate a demo user from the command line.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vouch_demo::{run, OutputFormat, User};

#[derive(Debug, Parser)]
#[command(
    name = "vouch",
    version,
    about = "Validate a user against its declared field constraints"
)]
struct Cli {
    /// Username to validate (Required, 5 to 20 characters).
    #[arg(long, default_value = "jo")]
    username: String,

    /// Role to validate (at most 10 characters).
    #[arg(long, default_value = "superadmin")]
    role: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let user = User::new(cli.username, cli.role);
    match run(&user, cli.format) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let targets = ["vouch", "vouch_demo", "vouch_registry", "vouch_constraint"]
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(format!("{},{}", level, targets))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
