use std::io::Write;

/// Environment variable holding the base log level (error, warn, info, debug, trace).
pub const LOG_ENV: &str = "SUPPORT_LOG";

#[derive(clap::Args, Debug, Default)]
pub struct Args {
    /// Increase verbosity, repeat for more verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Decrease verbosity, repeat for more quiet
    #[arg(short = 'q', long, action = clap::ArgAction::Count, global = true)]
    quiet: u8,
}

impl Args {
    fn level(&self, base: Option<log::Level>) -> u8 {
        let base = base.unwrap_or(log::Level::Warn);
        (base as u8)
            .saturating_add(self.verbose)
            .saturating_sub(self.quiet)
    }

    fn to_filter(&self, base: Option<log::Level>) -> log::LevelFilter {
        use log::LevelFilter::*;
        match self.level(base) {
            0 => Off,
            1 => Error,
            2 => Warn,
            3 => Info,
            4 => Debug,
            _ => Trace,
        }
    }

    /// Install the global logger. Diagnostics go to stderr, never stdout.
    pub fn init_logger(&self) {
        let base = std::env::var(LOG_ENV).ok().and_then(|s| s.parse().ok());

        env_logger::Builder::new()
            .filter_level(self.to_filter(base))
            .target(env_logger::Target::Stderr)
            .format(|buf, record| {
                writeln!(buf, "[{:<5}] {}", record.level(), record.args())
            })
            .init();
    }
}
