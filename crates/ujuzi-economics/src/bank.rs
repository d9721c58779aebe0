// crates/ujuzi-economics/src/bank.rs
//
// Native-currency balances held by the hosting environment.
//
// The registry components never touch these directly: the host debits the
// value attached to a call before dispatching it, and credits stake refunds
// returned by the validator registry. Amounts are in wei.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ujuzi_core::error::UjuziError;
use ujuzi_core::identity::Principal;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NativeBank {
    balances: BTreeMap<Principal, u128>,
}

impl NativeBank {
    /// Create a bank with no accounts.
    pub fn new() -> Self {
        Self {
            balances: BTreeMap::new(),
        }
    }

    /// Credit `amount` wei to `account`.
    pub fn deposit(&mut self, account: Principal, amount: u128) {
        let balance = self.balances.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Debit `amount` wei from `account`.
    ///
    /// # Errors
    /// Returns `InsufficientFunds` if the account holds less than `amount`;
    /// the balance is left unchanged.
    pub fn withdraw(&mut self, account: &Principal, amount: u128) -> Result<(), UjuziError> {
        let balance = self.balance(account);
        if amount > balance {
            return Err(UjuziError::InsufficientFunds {
                account: *account,
                balance,
                attached: amount,
            });
        }
        if amount > 0 {
            self.balances.insert(*account, balance - amount);
        }
        Ok(())
    }

    /// Current balance in wei (0 for unknown accounts).
    pub fn balance(&self, account: &Principal) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Accounts with a recorded balance, in principal order.
    pub fn accounts(&self) -> impl Iterator<Item = (&Principal, u128)> {
        self.balances.iter().map(|(p, b)| (p, *b))
    }

    /// Sum of all balances.
    pub fn total(&self) -> u128 {
        self.balances.values().sum()
    }
}
