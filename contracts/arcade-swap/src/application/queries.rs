use soroban_sdk::{Address, Env};

use crate::domain::SwapError;
use crate::infrastructure::{AdminRepository, GameRepository, TokenLedger};

/// Query: Configured price of a game, `None` when unpriced
pub struct GetGamePointPriceQuery;

impl GetGamePointPriceQuery {
    pub fn execute(env: &Env, game_id: u32) -> Option<i128> {
        GameRepository::load(env, game_id)
            .price()
            .ok()
            .map(|price| price.value())
    }
}

/// Query: Whether the backend keys needed for redemption exist
pub struct HasBackendKeyQuery;

impl HasBackendKeyQuery {
    pub fn game(env: &Env, game_id: u32) -> bool {
        GameRepository::load(env, game_id).backend_key.is_some()
    }

    pub fn arcade(env: &Env) -> bool {
        AdminRepository::get_arcade_backend_key(env).is_some()
    }
}

/// Query: Tokens custodied by the exchange
pub struct HeldBalanceQuery;

impl HeldBalanceQuery {
    pub fn execute(env: &Env) -> Result<i128, SwapError> {
        let token: Address = AdminRepository::get_token(env)?;
        Ok(TokenLedger::new(env, &token).held_balance())
    }
}
