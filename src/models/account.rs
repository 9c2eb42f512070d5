use log::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum AccountError {
    /// Deposit or withdrawal amount was zero, negative or NaN
    NonPositiveAmount(f64),
    InsufficientFunds { requested: f64, available: f64 },
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountError::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {:.2}", amount)
            }
            AccountError::InsufficientFunds { requested, available } => write!(
                f,
                "Insufficient funds: requested {:.2}, available {:.2}",
                requested, available
            ),
        }
    }
}

impl std::error::Error for AccountError {}

/// Bank account with an encapsulated balance
///
/// The balance can only change through [`BankAccount::deposit`] and
/// [`BankAccount::withdraw`], both of which reject non-positive amounts.
#[derive(Debug, Clone)]
pub struct BankAccount {
    number: String,
    owner: String,
    balance: f64,
}

impl BankAccount {
    /// Open an account; a negative opening balance is clamped to zero
    pub fn new(number: impl Into<String>, owner: impl Into<String>, initial_balance: f64) -> Self {
        let number = number.into();
        let owner = owner.into();
        let balance = if initial_balance >= 0.0 {
            initial_balance
        } else {
            warn!(
                "Account {}: initial balance {:.2} is negative, starting at 0.00",
                number, initial_balance
            );
            0.0
        };
        info!("Account {} opened for {}", number, owner);
        Self { number, owner, balance }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add funds, returning the new balance
    pub fn deposit(&mut self, amount: f64) -> Result<f64, AccountError> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(AccountError::NonPositiveAmount(amount));
        }
        self.balance += amount;
        Ok(self.balance)
    }

    /// Take funds out, returning the new balance
    pub fn withdraw(&mut self, amount: f64) -> Result<f64, AccountError> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(AccountError::NonPositiveAmount(amount));
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

impl std::fmt::Display for BankAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {:.2}", self.owner, self.number, self.balance)
    }
}
