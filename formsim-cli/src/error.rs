use formsim_error::Error as FormulaError;
use std::{fmt, io, path::PathBuf};

/// Utility enum to package errors that can occur while running a command.
#[derive(Debug)]
pub enum Error {
    /// A formula could not be compared.
    Formula {
        /// The name to show for the formula in the report.
        id: &'static str,

        /// The source of the formula the error points into.
        source: String,

        /// The error itself.
        err: FormulaError,
    },

    /// A file could not be read.
    Io(PathBuf, io::Error),

    /// A formula library is not valid TOML, or does not have the expected shape.
    Library(PathBuf, toml::de::Error),
}

impl Error {
    /// Report this error to stderr. Formula errors are rendered with the offending source
    /// highlighted.
    pub fn report_to_stderr(&self) {
        match self {
            Self::Formula { id, source, err } => {
                if err.report_to_stderr(id, source).is_err() {
                    eprintln!("{}", err);
                }
            },
            _ => eprintln!("error: {}", self),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Formula { id, err, .. } => write!(f, "{}: {}", id, err),
            Self::Io(path, err) => write!(f, "could not read `{}`: {}", path.display(), err),
            Self::Library(path, err) => {
                write!(f, "invalid formula library `{}`: {}", path.display(), err)
            },
        }
    }
}
