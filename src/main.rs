use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use support_setup::catalog::Catalog;
use support_setup::env::EnvSnapshot;
use support_setup::loader::{self, LoadOutcome};
use support_setup::{logging, report, validator};

#[derive(Parser)]
#[command(name = "check-setup")]
#[command(about = "Check that all environment variables needed by the support automation are set")]
#[command(version)]
struct Cli {
    #[arg(
        long = "env-file",
        env = "SUPPORT_ENV_FILE",
        help = "Dotfile to load before checking [default: nearest .env.local]"
    )]
    env_file: Option<PathBuf>,
    #[arg(long = "no-env-file", help = "Only check variables already in the environment")]
    no_env_file: bool,
    #[arg(long, help = "Print the result as JSON")]
    json: bool,
    #[command(flatten)]
    log: logging::Args,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log.init_logger();

    let env_file = loader::resolve_env_file(cli.env_file);
    let mut env = EnvSnapshot::from_process();
    if !cli.no_env_file {
        if let LoadOutcome::Skipped = loader::load(&env_file, &mut env) {
            log::info!("No env file at {}, using the current environment", env_file.display());
        }
    }

    let report = validator::validate(&Catalog::builtin(), &env);

    let (mut out, mut err) = (std::io::stdout().lock(), std::io::stderr().lock());
    if cli.json {
        report::write_json(&report, &env_file, &mut out, &mut err)?;
    } else {
        report::write_text(&report, &env_file, &mut out, &mut err)?;
    }

    if !report.is_ok() {
        std::process::exit(report.exit_code());
    }
    Ok(())
}
