use std::str::FromStr;

use crate::error::Error;

/// What to do with a result code that is missing from the client's table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCodePolicy {
    /// Decode to the `Unknown(code)` variant and log a warning
    #[default]
    Preserve,
    /// Fail the decode with `Error::UnknownResultCode`
    Reject,
}

impl FromStr for UnknownCodePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "reject" => Ok(Self::Reject),
            other => Err(Error::BadConfigError(format!(
                "Invalid unknown result code policy '{}', expected 'preserve' or 'reject'",
                other
            ))),
        }
    }
}

/// A configuration for decoding replies
///
/// ```rs
/// let mut opts = Opts::default();
/// opts.unknown_result_codes = "reject".parse()?;
/// let batch = CreateTransfersResultBatch::with_opts(&reply, &opts)?;
/// ```
#[derive(Debug, Clone)]
pub struct Opts {
    /// Result codes newer than this client's tables are preserved by default, so a
    /// server upgrade does not break decoding.
    pub unknown_result_codes: UnknownCodePolicy,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            unknown_result_codes: UnknownCodePolicy::Preserve,
        }
    }
}
