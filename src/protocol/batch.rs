use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::Opts;
use crate::constant::{CreateAccountResult, CreateTransferResult, RECORD_SIZE};
use crate::error::{Error, Result, eyre};
use crate::opts::UnknownCodePolicy;
use crate::protocol::ResultCode;
use crate::protocol::record::{EventResult, ResultRecord, read_result};
use zerocopy::{FromBytes, IntoBytes};

/// A read-only view over a reply made of fixed-size result records
///
/// The view borrows the reply buffer; it never copies or mutates it. Records are
/// decoded on every access, nothing is cached. The view is `Copy + Send + Sync`, so
/// any number of threads may read the same reply at once.
pub struct ResultBatch<'a, R> {
    records: &'a [ResultRecord],
    unknown_codes: UnknownCodePolicy,
    _result: PhantomData<fn() -> R>,
}

pub type CreateAccountsResultBatch<'a> = ResultBatch<'a, CreateAccountResult>;
pub type CreateTransfersResultBatch<'a> = ResultBatch<'a, CreateTransferResult>;

impl<'a, R: ResultCode> ResultBatch<'a, R> {
    /// View `buffer` as result records with the default [`Opts`]
    pub fn new(buffer: &'a [u8]) -> Result<Self> {
        Self::with_opts(buffer, &Opts::default())
    }

    /// View `buffer` as result records
    ///
    /// An empty buffer is a valid reply: every event in the batch succeeded.
    /// A length that is not a multiple of [`RECORD_SIZE`] means the client and the
    /// server disagree on the protocol and fails with a fatal
    /// [`Error::MisalignedBuffer`].
    pub fn with_opts(buffer: &'a [u8], opts: &Opts) -> Result<Self> {
        if buffer.len() % RECORD_SIZE != 0 {
            tracing::error!(
                operation = R::OPERATION.name(),
                len = buffer.len(),
                "reply is not a whole number of result records"
            );
            return Err(Error::MisalignedBuffer {
                len: buffer.len(),
                record_size: RECORD_SIZE,
            });
        }

        let records = <[ResultRecord]>::ref_from_bytes(buffer).map_err(|_| {
            Error::LibraryBug(eyre!(
                "cannot view {} bytes as result records",
                buffer.len()
            ))
        })?;

        tracing::debug!(
            operation = R::OPERATION.name(),
            count = records.len(),
            "result batch"
        );
        Ok(Self {
            records,
            unknown_codes: opts.unknown_result_codes,
            _result: PhantomData,
        })
    }

    /// View a reply body handed over by the transport, which may have none
    pub fn from_reply(reply: Option<&'a [u8]>, opts: &Opts) -> Result<Self> {
        match reply {
            Some(buffer) => Self::with_opts(buffer, opts),
            None => {
                tracing::error!(operation = R::OPERATION.name(), "missing reply buffer");
                Err(Error::MissingBuffer)
            }
        }
    }

    /// View a reply delivered as a pointer and a length, e.g. from a completion callback
    ///
    /// A null `ptr` fails with [`Error::MissingBuffer`].
    ///
    /// # Safety
    /// If `ptr` is non-null it must point to `len` initialized bytes that stay valid
    /// and are not written to for the whole lifetime `'a`.
    pub unsafe fn from_raw_parts(ptr: *const u8, len: usize, opts: &Opts) -> Result<Self> {
        if ptr.is_null() {
            return Self::from_reply(None, opts);
        }
        // SAFETY: `ptr` is non-null and the caller guarantees `len` readable bytes for `'a`.
        let buffer = unsafe { std::slice::from_raw_parts(ptr, len) };
        Self::with_opts(buffer, opts)
    }

    /// Number of records in the reply
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Length of the underlying reply buffer in bytes
    pub fn buffer_len(&self) -> usize {
        self.records.as_bytes().len()
    }

    /// Decode the record at `index` (position in the reply, not the event index)
    ///
    /// Accepts any primitive integer. A negative index or one past the end fails with
    /// the recoverable [`Error::IndexOutOfBounds`].
    pub fn get<I>(&self, index: I) -> Result<EventResult<R>>
    where
        I: Copy + TryInto<usize> + TryInto<i128>,
    {
        let record = <I as TryInto<usize>>::try_into(index)
            .ok()
            .and_then(|i| self.records.get(i));

        match record {
            Some(record) => decode_record(record, self.unknown_codes),
            None => Err(Error::IndexOutOfBounds {
                index: <I as TryInto<i128>>::try_into(index).unwrap_or(i128::MAX),
                len: self.len(),
            }),
        }
    }

    /// Decode every record, in reply order
    ///
    /// Fails as a whole if any record fails; there are no partial results.
    pub fn to_vec(&self) -> Result<Vec<EventResult<R>>> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'a, R> {
        Iter {
            records: self.records.iter(),
            unknown_codes: self.unknown_codes,
            _result: PhantomData,
        }
    }

    /// Decoded records whose result is not `Ok`, in reply order
    pub fn failures(self) -> impl Iterator<Item = Result<EventResult<R>>> + 'a {
        self.iter()
            .filter(|decoded| !matches!(decoded, Ok(result) if result.is_ok()))
    }
}

fn decode_record<R: ResultCode>(
    record: &ResultRecord,
    unknown_codes: UnknownCodePolicy,
) -> Result<EventResult<R>> {
    let (decoded, _rest) = read_result::<R>(record.as_bytes())?;
    if decoded.result.is_unknown() {
        let code = decoded.result.as_u32();
        match unknown_codes {
            UnknownCodePolicy::Preserve => {
                tracing::warn!(
                    operation = R::OPERATION.name(),
                    index = decoded.index,
                    code,
                    "unknown result code"
                );
            }
            UnknownCodePolicy::Reject => {
                return Err(Error::UnknownResultCode {
                    operation: R::OPERATION,
                    index: decoded.index,
                    code,
                });
            }
        }
    }
    Ok(decoded)
}

impl<R> Clone for ResultBatch<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ResultBatch<'_, R> {}

impl<R: ResultCode> fmt::Debug for ResultBatch<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultBatch")
            .field("operation", &R::OPERATION)
            .field("len", &self.len())
            .field("unknown_codes", &self.unknown_codes)
            .finish()
    }
}

impl<'a, R: ResultCode> IntoIterator for ResultBatch<'a, R> {
    type Item = Result<EventResult<R>>;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, R: ResultCode> IntoIterator for &ResultBatch<'a, R> {
    type Item = Result<EventResult<R>>;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the decoded records of a [`ResultBatch`], in reply order
pub struct Iter<'a, R> {
    records: std::slice::Iter<'a, ResultRecord>,
    unknown_codes: UnknownCodePolicy,
    _result: PhantomData<fn() -> R>,
}

impl<R: ResultCode> Iterator for Iter<'_, R> {
    type Item = Result<EventResult<R>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(|record| decode_record(record, self.unknown_codes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl<R: ResultCode> DoubleEndedIterator for Iter<'_, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.records
            .next_back()
            .map(|record| decode_record(record, self.unknown_codes))
    }
}

impl<R: ResultCode> ExactSizeIterator for Iter<'_, R> {}

impl<R: ResultCode> FusedIterator for Iter<'_, R> {}
