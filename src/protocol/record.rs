use crate::constant::{CreateAccountResult, CreateTransferResult, RECORD_SIZE};
use crate::error::{Error, Result};
use crate::protocol::ResultCode;
use crate::protocol::primitive::*;
use zerocopy::byteorder::little_endian::U32 as U32LE;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// One result record (zero-copy)
///
/// Layout matches the wire format:
/// - index: 4 bytes (little-endian, position of the event in the submitted batch)
/// - result: 4 bytes (little-endian, 0 = ok)
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable, IntoBytes, Unaligned)]
pub struct ResultRecord {
    index: U32LE,
    result: U32LE,
}

impl ResultRecord {
    pub fn index(&self) -> u32 {
        self.index.get()
    }

    /// The raw result code before it is mapped through a result-code table
    pub fn code(&self) -> u32 {
        self.result.get()
    }
}

/// A decoded result record
///
/// `index` is the position of the event in the batch that was submitted, not the
/// position of this record in the reply. Replies usually carry failures only, so
/// indexes can skip, and nothing guarantees they are sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventResult<R> {
    pub index: u32,
    pub result: R,
}

impl<R: ResultCode> EventResult<R> {
    pub fn new(index: u32, result: R) -> Self {
        Self { index, result }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub type CreateAccountsResult = EventResult<CreateAccountResult>;
pub type CreateTransfersResult = EventResult<CreateTransferResult>;

/// Read one result record from the head of `data`
///
/// Never fails on the result code: a code missing from `R`'s table decodes to its
/// `Unknown` variant.
pub fn read_result<R: ResultCode>(data: &[u8]) -> Result<(EventResult<R>, &[u8])> {
    if data.len() < RECORD_SIZE {
        return Err(Error::UnexpectedEof);
    }
    let (index, rest) = read_int_4(data)?;
    let (code, rest) = read_int_4(rest)?;
    Ok((EventResult::new(index, R::from_u32(code)), rest))
}

/// Append one result record
pub fn write_result(out: &mut Vec<u8>, index: u32, code: u32) {
    write_int_4(out, index);
    write_int_4(out, code);
}
