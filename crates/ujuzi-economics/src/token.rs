// crates/ujuzi-economics/src/token.rs
//
// The cultural reputation token.
//
// A per-principal, non-negative score of accumulated contribution and
// validation credit. It only moves through mint and burn, each gated by its
// own capability; transfers between principals are permanently disabled so
// the score reflects registry-issued credit only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ujuzi_core::access::{AccessControl, Role};
use ujuzi_core::error::UjuziError;
use ujuzi_core::event::{Component, Event};
use ujuzi_core::identity::Principal;
use ujuzi_core::traits::RewardLedger;

pub const TOKEN_NAME: &str = "AfriVerse Cultural Token";
pub const TOKEN_SYMBOL: &str = "AFRIC";
/// Scores are whole points.
pub const TOKEN_DECIMALS: u8 = 0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationToken {
    access: AccessControl,
    balances: BTreeMap<Principal, u64>,
    total_supply: u64,
}

impl ReputationToken {
    /// Deploy a token with `deployer` as DefaultAdmin and no balances.
    pub fn new(deployer: Principal) -> Self {
        Self {
            access: AccessControl::new(Component::ReputationToken, deployer),
            balances: BTreeMap::new(),
            total_supply: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        TOKEN_NAME
    }

    pub fn symbol(&self) -> &'static str {
        TOKEN_SYMBOL
    }

    pub fn decimals(&self) -> u8 {
        TOKEN_DECIMALS
    }

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    pub fn has_role(&self, role: Role, who: &Principal) -> bool {
        self.access.has_role(role, who)
    }

    pub fn grant_role(
        &mut self,
        sender: &Principal,
        role: Role,
        account: Principal,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.access.grant_role(sender, role, account, events)
    }

    pub fn revoke_role(
        &mut self,
        sender: &Principal,
        role: Role,
        account: Principal,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.access.revoke_role(sender, role, account, events)
    }

    /// Credit `amount` to `to`.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` lacks Minter.
    /// - `InvalidAmount` if `amount` is zero or the supply would overflow.
    pub fn mint_cultural_tokens(
        &mut self,
        caller: &Principal,
        to: &Principal,
        amount: u64,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.access.require(Role::Minter, caller)?;
        if amount == 0 {
            return Err(UjuziError::InvalidAmount(
                "mint amount must be positive".to_string(),
            ));
        }
        let balance = self.balance_of(to);
        let (new_balance, new_supply) = match (
            balance.checked_add(amount),
            self.total_supply.checked_add(amount),
        ) {
            (Some(b), Some(s)) => (b, s),
            _ => {
                return Err(UjuziError::InvalidAmount(format!(
                    "minting {} would overflow the token supply",
                    amount
                )))
            }
        };

        self.balances.insert(*to, new_balance);
        self.total_supply = new_supply;
        tracing::debug!(account = %to.short(), amount, balance = new_balance, "Cultural tokens minted");
        events.push(Event::CulturalTokensMinted {
            account: *to,
            amount,
        });
        Ok(())
    }

    /// Debit `amount` from `from`.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` lacks Burner.
    /// - `InvalidAmount` if `amount` is zero.
    /// - `InsufficientBalance` if `amount` exceeds the current balance; the
    ///   balance is left unchanged.
    pub fn burn_cultural_tokens(
        &mut self,
        caller: &Principal,
        from: &Principal,
        amount: u64,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.access.require(Role::Burner, caller)?;
        if amount == 0 {
            return Err(UjuziError::InvalidAmount(
                "burn amount must be positive".to_string(),
            ));
        }
        let balance = self.balance_of(from);
        if amount > balance {
            return Err(UjuziError::InsufficientBalance {
                account: *from,
                balance,
                requested: amount,
            });
        }

        // Accounts are never deleted, even at zero.
        self.balances.insert(*from, balance - amount);
        self.total_supply -= amount;
        tracing::debug!(account = %from.short(), amount, balance = balance - amount, "Cultural tokens burned");
        events.push(Event::CulturalTokensBurned {
            account: *from,
            amount,
        });
        Ok(())
    }

    /// Current balance; 0 for principals never minted to.
    pub fn balance_of(&self, who: &Principal) -> u64 {
        self.balances.get(who).copied().unwrap_or(0)
    }

    /// Alias of [`balance_of`](Self::balance_of).
    pub fn cultural_score(&self, who: &Principal) -> u64 {
        self.balance_of(who)
    }

    pub fn has_minimum_score(&self, who: &Principal, threshold: u64) -> bool {
        self.balance_of(who) >= threshold
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Every principal with a recorded account, with its balance.
    pub fn holders(&self) -> impl Iterator<Item = (&Principal, u64)> {
        self.balances.iter().map(|(p, b)| (p, *b))
    }

    /// Always fails: cultural tokens are non-transferable.
    pub fn transfer(
        &mut self,
        _caller: &Principal,
        _to: &Principal,
        _amount: u64,
    ) -> Result<(), UjuziError> {
        Err(UjuziError::NonTransferable)
    }

    /// Always fails: cultural tokens are non-transferable.
    pub fn transfer_from(
        &mut self,
        _caller: &Principal,
        _from: &Principal,
        _to: &Principal,
        _amount: u64,
    ) -> Result<(), UjuziError> {
        Err(UjuziError::NonTransferable)
    }

    /// Always fails: there is nothing an allowance could be spent on.
    pub fn approve(
        &mut self,
        _caller: &Principal,
        _spender: &Principal,
        _amount: u64,
    ) -> Result<(), UjuziError> {
        Err(UjuziError::NonTransferable)
    }
}

impl RewardLedger for ReputationToken {
    fn balance_of(&self, who: &Principal) -> u64 {
        ReputationToken::balance_of(self, who)
    }

    fn mint(
        &mut self,
        caller: &Principal,
        to: &Principal,
        amount: u64,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.mint_cultural_tokens(caller, to, amount, events)
    }

    fn burn(
        &mut self,
        caller: &Principal,
        from: &Principal,
        amount: u64,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.burn_cultural_tokens(caller, from, amount, events)
    }
}
