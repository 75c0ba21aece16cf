//! The lifecycle of a document import job.

use crate::error::UnknownJobStatus;
use formsim_error::Error;
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The status of an import job.
///
/// A job starts [`Pending`](JobStatus::Pending), is picked up for processing, ends either
/// succeeded or failed, and can then be archived. Statuses are stored as three-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JobStatus {
    /// Waiting to be processed (`pnd`).
    #[cfg_attr(feature = "serde", serde(rename = "pnd"))]
    Pending,

    /// Being processed (`prc`).
    #[cfg_attr(feature = "serde", serde(rename = "prc"))]
    Processing,

    /// Processed successfully (`suc`).
    #[cfg_attr(feature = "serde", serde(rename = "suc"))]
    Succeeded,

    /// Processing failed (`err`).
    #[cfg_attr(feature = "serde", serde(rename = "err"))]
    Failed,

    /// Hidden from the list of jobs (`arc`).
    #[cfg_attr(feature = "serde", serde(rename = "arc"))]
    Archived,
}

impl JobStatus {
    /// Returns the stored code of this status.
    pub fn code(self) -> &'static str {
        match self {
            Self::Pending => "pnd",
            Self::Processing => "prc",
            Self::Succeeded => "suc",
            Self::Failed => "err",
            Self::Archived => "arc",
        }
    }

    /// Returns true if a job with this status can move to the given status.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Processing)
                | (Self::Processing, Self::Succeeded | Self::Failed)
                | (Self::Succeeded | Self::Failed, Self::Archived)
        )
    }

    /// Returns true if the job is done processing, whatever the outcome.
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Archived)
    }
}

impl FromStr for JobStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pnd" => Ok(Self::Pending),
            "prc" => Ok(Self::Processing),
            "suc" => Ok(Self::Succeeded),
            "err" => Ok(Self::Failed),
            "arc" => Ok(Self::Archived),
            _ => Err(Error::new(vec![0..s.chars().count()], UnknownJobStatus {
                code: s.to_owned(),
            })),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn codes() {
        for status in [
            JobStatus::Pending,
            JobStatus::Processing,
            JobStatus::Succeeded,
            JobStatus::Failed,
            JobStatus::Archived,
        ] {
            assert_eq!(status.to_string().parse::<JobStatus>().unwrap(), status);
        }
        assert_eq!(JobStatus::Failed.to_string(), "err");
    }

    #[test]
    fn unknown_code() {
        let err = "done".parse::<JobStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown job status: `done` (at 0..4)");
    }

    #[test]
    fn transitions() {
        use JobStatus::*;
        assert!(Pending.can_transition_to(Processing));
        assert!(Processing.can_transition_to(Failed));
        assert!(Succeeded.can_transition_to(Archived));
        assert!(!Pending.can_transition_to(Succeeded));
        assert!(!Archived.can_transition_to(Pending));
        assert!(!Processing.can_transition_to(Archived));
        assert!(Failed.is_finished());
        assert!(!Processing.is_finished());
    }
}
