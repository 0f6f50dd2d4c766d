use crate::Opts;
use crate::constant::Operation;
use crate::error::{Error, Result};
use crate::protocol::batch::{CreateAccountsResultBatch, CreateTransfersResultBatch};

/// A reply body routed to the batch type of its operation
#[derive(Debug, Clone, Copy)]
pub enum Reply<'a> {
    CreateAccounts(CreateAccountsResultBatch<'a>),
    CreateTransfers(CreateTransfersResultBatch<'a>),
}

impl<'a> Reply<'a> {
    /// Decode the reply body of a request with the given operation byte
    ///
    /// Only `create_accounts` and `create_transfers` reply with result records.
    #[tracing::instrument(skip_all, fields(operation = operation))]
    pub fn decode(operation: u8, body: Option<&'a [u8]>, opts: &Opts) -> Result<Self> {
        match Operation::from_u8(operation) {
            Some(Operation::CreateAccounts) => Ok(Reply::CreateAccounts(
                CreateAccountsResultBatch::from_reply(body, opts)?,
            )),
            Some(Operation::CreateTransfers) => Ok(Reply::CreateTransfers(
                CreateTransfersResultBatch::from_reply(body, opts)?,
            )),
            Some(Operation::LookupAccounts | Operation::LookupTransfers) | None => {
                Err(Error::UnsupportedOperation(operation))
            }
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Reply::CreateAccounts(_) => Operation::CreateAccounts,
            Reply::CreateTransfers(_) => Operation::CreateTransfers,
        }
    }

    /// Number of result records; zero means every event succeeded
    pub fn len(&self) -> usize {
        match self {
            Reply::CreateAccounts(batch) => batch.len(),
            Reply::CreateTransfers(batch) => batch.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
