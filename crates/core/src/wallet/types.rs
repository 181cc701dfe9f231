//! Domain types for wallet operations.

use std::fmt;
use std::str::FromStr;

use super::error::WalletError;

/// Wallet balance in minor currency units.
pub type Balance = i64;

/// Kind of balance mutation a client may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Increase the balance.
    Deposit,
    /// Decrease the balance, only if enough funds are available.
    Withdraw,
}

impl OperationKind {
    /// Returns the wire name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = WalletError;

    /// Wire names are matched exactly; `"deposit"` is not a deposit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEPOSIT" => Ok(Self::Deposit),
            "WITHDRAW" => Ok(Self::Withdraw),
            other => Err(WalletError::InvalidOperation(format!(
                "unknown operation type '{other}'"
            ))),
        }
    }
}

/// A strictly positive amount in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    /// Validates a raw amount.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidOperation` for zero or negative values.
    pub fn new(value: i64) -> Result<Self, WalletError> {
        if value <= 0 {
            return Err(WalletError::InvalidOperation(format!(
                "amount must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Amount {
    type Error = WalletError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
