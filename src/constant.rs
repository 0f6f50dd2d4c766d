/// Size of one result record on the wire: 4-byte event index + 4-byte result code
pub const RECORD_SIZE: usize = 8;

/// Operation bytes carried in request and reply headers
///
/// Values below 128 are reserved for the replication protocol.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateAccounts = 128,
    CreateTransfers = 129,
    LookupAccounts = 130,
    LookupTransfers = 131,
}

impl Operation {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            128 => Some(Self::CreateAccounts),
            129 => Some(Self::CreateTransfers),
            130 => Some(Self::LookupAccounts),
            131 => Some(Self::LookupTransfers),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::CreateAccounts => "create_accounts",
            Self::CreateTransfers => "create_transfers",
            Self::LookupAccounts => "lookup_accounts",
            Self::LookupTransfers => "lookup_transfers",
        }
    }
}

/// Declares a result-code table.
///
/// `Ok = 0` and the `Unknown(u32)` fallback are always generated; only the
/// rejection reasons are listed. A new protocol code is one more line.
macro_rules! result_codes {
    (
        $(#[$meta:meta])*
        pub enum $name:ident for $operation:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            /// The event was applied
            Ok,
            $($(#[$vmeta])* $variant,)+
            /// A code this client does not know, kept as received
            Unknown(u32),
        }

        impl $name {
            pub fn name(self) -> &'static str {
                match self {
                    Self::Ok => "Ok",
                    $(Self::$variant => stringify!($variant),)+
                    Self::Unknown(_) => "Unknown",
                }
            }
        }

        impl crate::protocol::ResultCode for $name {
            const OPERATION: Operation = Operation::$operation;

            fn from_u32(code: u32) -> Self {
                match code {
                    0 => Self::Ok,
                    $($code => Self::$variant,)+
                    other => Self::Unknown(other),
                }
            }

            fn as_u32(self) -> u32 {
                match self {
                    Self::Ok => 0,
                    $(Self::$variant => $code,)+
                    Self::Unknown(code) => code,
                }
            }

            fn is_ok(self) -> bool {
                matches!(self, Self::Ok)
            }

            fn is_unknown(self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<u32> for $name {
            fn from(code: u32) -> Self {
                <Self as crate::protocol::ResultCode>::from_u32(code)
            }
        }

        impl From<$name> for u32 {
            fn from(result: $name) -> u32 {
                <$name as crate::protocol::ResultCode>::as_u32(result)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    Self::Unknown(code) => write!(f, "Unknown({})", code),
                    _ => f.write_str(self.name()),
                }
            }
        }
    };
}

result_codes! {
    /// Outcome of one event in a `create_accounts` batch
    pub enum CreateAccountResult for CreateAccounts {
        LinkedEventFailed = 1,
        LinkedEventChainOpen = 2,
        TimestampMustBeZero = 3,
        ReservedFlag = 4,
        ReservedField = 5,
        IdMustNotBeZero = 6,
        IdMustNotBeIntMax = 7,
        LedgerMustNotBeZero = 8,
        CodeMustNotBeZero = 9,
        DebitsPendingMustBeZero = 10,
        DebitsPostedMustBeZero = 11,
        CreditsPendingMustBeZero = 12,
        CreditsPostedMustBeZero = 13,
        MutuallyExclusiveFlags = 14,
        ExistsWithDifferentFlags = 15,
        ExistsWithDifferentUserData = 16,
        ExistsWithDifferentLedger = 17,
        ExistsWithDifferentCode = 18,
        Exists = 19,
    }
}

result_codes! {
    /// Outcome of one event in a `create_transfers` batch
    pub enum CreateTransferResult for CreateTransfers {
        LinkedEventFailed = 1,
        LinkedEventChainOpen = 2,
        TimestampMustBeZero = 3,
        ReservedFlag = 4,
        ReservedField = 5,
        IdMustNotBeZero = 6,
        IdMustNotBeIntMax = 7,
        DebitAccountIdMustNotBeZero = 8,
        DebitAccountIdMustNotBeIntMax = 9,
        CreditAccountIdMustNotBeZero = 10,
        CreditAccountIdMustNotBeIntMax = 11,
        AccountsMustBeDifferent = 12,
        PendingIdMustBeZero = 13,
        PendingIdMustNotBeZero = 14,
        PendingIdMustNotBeIntMax = 15,
        TimeoutReservedForPendingTransfer = 16,
        LedgerMustNotBeZero = 17,
        CodeMustNotBeZero = 18,
        AmountMustNotBeZero = 19,
        DebitAccountNotFound = 20,
        CreditAccountNotFound = 21,
        AccountsMustHaveTheSameLedger = 22,
        TransferMustHaveTheSameLedgerAsAccounts = 23,
        ExistsWithDifferentFlags = 24,
        ExistsWithDifferentDebitAccountId = 25,
        ExistsWithDifferentCreditAccountId = 26,
        ExistsWithDifferentUserData = 27,
        ExistsWithDifferentPendingId = 28,
        ExistsWithDifferentTimeout = 29,
        ExistsWithDifferentCode = 30,
        ExistsWithDifferentAmount = 31,
        Exists = 32,
        OverflowsDebits = 33,
        OverflowsCredits = 34,
        ExceedsCredits = 35,
        ExceedsDebits = 36,
        PendingTransferNotFound = 37,
        PendingTransferNotPending = 38,
        PendingTransferHasDifferentDebitAccountId = 39,
        PendingTransferHasDifferentCreditAccountId = 40,
        PendingTransferHasDifferentLedger = 41,
        PendingTransferHasDifferentCode = 42,
        ExceedsPendingTransferAmount = 43,
        PendingTransferHasDifferentAmount = 44,
        PendingTransferAlreadyPosted = 45,
        PendingTransferAlreadyVoided = 46,
        PendingTransferExpired = 47,
    }
}
