//! Zero-copy decoding of `create_accounts` / `create_transfers` replies.
//!
//! A reply is a flat buffer of 8-byte records, one per event that did not simply
//! succeed. [`ResultBatch`] views such a buffer without copying it:
//!
//! ```
//! use zero_ledger::{CreateTransfersResultBatch, constant::CreateTransferResult};
//!
//! let reply = [1u8, 0, 0, 0, 36, 0, 0, 0];
//! let batch = CreateTransfersResultBatch::new(&reply)?;
//! assert_eq!(batch.len(), 1);
//! assert_eq!(batch.get(0)?.result, CreateTransferResult::ExceedsDebits);
//! # Ok::<(), zero_ledger::error::Error>(())
//! ```

pub mod constant;
pub mod error;
mod opts;
pub mod protocol;

pub use opts::{Opts, UnknownCodePolicy};
pub use protocol::{
    CreateAccountsResult, CreateAccountsResultBatch, CreateTransfersResult,
    CreateTransfersResultBatch, EventResult, Reply, ResultBatch, ResultCode,
};

#[cfg(test)]
mod opts_test;
