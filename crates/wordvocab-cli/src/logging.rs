use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// Install ``stderrlog``.
    ///
    /// ## Arguments
    /// * `default` - The level used when no `-v` is given;
    ///   `-v` counts are offset from warn (`-v` is info).
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(level_num(self.level(default)))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }

    fn level(
        &self,
        default: u8,
    ) -> u8 {
        if self.verbose > 0 {
            self.verbose.saturating_add(2)
        } else {
            default
        }
    }
}

fn level_num(level: u8) -> stderrlog::LogLevelNum {
    match level {
        0 => stderrlog::LogLevelNum::Off,
        1 => stderrlog::LogLevelNum::Error,
        2 => stderrlog::LogLevelNum::Warn,
        3 => stderrlog::LogLevelNum::Info,
        4 => stderrlog::LogLevelNum::Debug,
        _ => stderrlog::LogLevelNum::Trace,
    }
}
