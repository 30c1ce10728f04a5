use soroban_sdk::{token, Address, Env};

use crate::domain::{ensure_positive_amount, SwapError};

/// Gateway for the custodied SEP-41 token.
///
/// Every check runs before the transfer, so a rejected call moves nothing.
pub struct TokenLedger<'a> {
    token: token::Client<'a>,
    exchange: Address,
}

impl<'a> TokenLedger<'a> {
    pub fn new(env: &'a Env, token: &Address) -> Self {
        Self {
            token: token::Client::new(env, token),
            exchange: env.current_contract_address(),
        }
    }

    /// Tokens currently held by the exchange
    pub fn held_balance(&self) -> i128 {
        self.token.balance(&self.exchange)
    }

    /// Pulls `amount` from `from` using the allowance granted to the exchange
    pub fn deposit(&self, from: &Address, amount: i128) -> Result<(), SwapError> {
        ensure_positive_amount(amount)?;

        if self.token.allowance(from, &self.exchange) < amount {
            return Err(SwapError::InsufficientAllowance);
        }
        if self.token.balance(from) < amount {
            return Err(SwapError::InsufficientFunds);
        }

        self.token
            .transfer_from(&self.exchange, from, &self.exchange, &amount);
        Ok(())
    }

    /// Pushes `amount` from the exchange to `to`
    pub fn withdraw(&self, to: &Address, amount: i128) -> Result<(), SwapError> {
        ensure_positive_amount(amount)?;

        if self.held_balance() < amount {
            return Err(SwapError::InsufficientFunds);
        }

        self.token.transfer(&self.exchange, to, &amount);
        Ok(())
    }
}
