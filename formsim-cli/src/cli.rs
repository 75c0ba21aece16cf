use clap::{Args, Parser, Subcommand, ValueEnum};
use formsim_compute::{MatchOptions, MatchOptionsBuilder};
use simplelog::LevelFilter;
use std::path::PathBuf;

/// Compares LaTeX formulas by structure, ignoring the names of their variables.
#[derive(Parser, Debug)]
#[command(name = "formsim")]
#[command(version)]
#[command(about = "Compares LaTeX formulas by structure, ignoring the names of their variables.")]
#[command(long_about = "Compares LaTeX formulas by structure, ignoring the names of their \
    variables. Run without a subcommand to compare formulas interactively.")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Minimum number of tokens a shared subexpression must span to be reported.
    #[arg(long, global = true, default_value_t = 3)]
    pub min_block_len: usize,

    /// Maximum length of a formula, in characters.
    #[arg(long, global = true)]
    pub max_input_len: Option<usize>,

    /// How much to log to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl GlobalOptions {
    /// Builds the comparison options from the flags.
    pub fn match_options(&self) -> MatchOptions {
        MatchOptionsBuilder::new()
            .min_block_len(self.min_block_len)
            .max_input_len(self.max_input_len)
            .build()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prints how similar two formulas are, from 0 to 100.
    Compare {
        /// The first formula.
        a: String,

        /// The second formula.
        b: String,
    },

    /// Prints the regions of the first formula that also appear in the second.
    Spans {
        /// The formula to highlight.
        a: String,

        /// The formula to look for shared regions in.
        b: String,
    },

    /// Ranks the formulas of a library by their similarity to a query.
    Search {
        /// The query formula.
        query: String,

        /// TOML file listing the formulas, as `[[formula]]` tables.
        #[arg(long, short)]
        library: PathBuf,

        /// Number of results to show.
        #[arg(long, short = 'n', default_value_t = 10)]
        limit: usize,
    },

    /// Lists the `$$ ... $$` formulas found in a text file.
    Extract {
        /// The text file to read.
        file: PathBuf,

        /// Also print the text around each formula.
        #[arg(long)]
        context: bool,
    },
}

/// Verbosity of the log output.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "formsim", "spans", "a+b", "x+y", "--min-block-len", "2", "--log-level", "debug",
        ]).unwrap();
        assert_eq!(cli.global.match_options().min_block_len, 2);
        assert_eq!(cli.global.log_level, LogLevel::Debug);
        assert!(matches!(cli.command, Some(Command::Spans { .. })));
    }

    #[test]
    fn no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["formsim"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.global.match_options(), MatchOptions::default());
    }

    #[test]
    fn search_needs_library() {
        assert!(Cli::try_parse_from(["formsim", "search", "x^2"]).is_err());
    }
}
