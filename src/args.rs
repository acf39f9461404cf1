use clap::Parser;

/// Source/destination placeholder meaning stdin or stdout
pub const STDIO: &str = "*";

/// Stable matching solver and verifier for hospital/student instances
#[derive(Parser, Debug)]
#[command(name = "stable-match")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// What to do with the instance
    #[arg(value_enum, default_value = "match")]
    pub mode: Mode,

    /// Instance file, or `*` for stdin
    #[arg(default_value = STDIO)]
    pub input: String,

    /// match: file to write the matching to. verify: file to read the
    /// candidate matching from. `*` selects stdout/stdin.
    #[arg(default_value = STDIO)]
    pub output: String,

    /// Print elapsed wall-clock time after the result
    #[arg(value_enum)]
    pub timed: Option<Timed>,
}

impl Args {
    /// True if the trailing TIMED flag was given
    pub fn is_timed(&self) -> bool {
        self.timed.is_some()
    }

    /// True if the instance and the candidate matching share stdin
    pub fn shares_stdin(&self) -> bool {
        self.input == STDIO && self.output == STDIO
    }
}

/// Run mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Compute the hospital-optimal stable matching
    #[value(name = "match")]
    Match,
    /// Check a candidate matching for validity and stability
    #[value(name = "verify")]
    Verify,
}

/// Trailing timing flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Timed {
    /// Emit `Elapsed: <ns> ns`
    #[value(name = "TIMED")]
    Timed,
}
