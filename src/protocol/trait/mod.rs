use std::fmt;

use crate::constant::Operation;

/// Trait for a result-code table carried in a reply
///
/// Implemented by the `result_codes!` tables in [`crate::constant`].
pub trait ResultCode: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The operation whose reply carries these codes
    const OPERATION: Operation;

    /// Map a wire value to a result code
    ///
    /// Total: a value missing from the table maps to the `Unknown` variant, never to `Ok`.
    fn from_u32(code: u32) -> Self;

    /// The wire value; `from_u32(c).as_u32() == c` for every `c`
    fn as_u32(self) -> u32;

    /// True only for code 0
    fn is_ok(self) -> bool;

    fn is_unknown(self) -> bool;
}
