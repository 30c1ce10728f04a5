#![no_std]

//! Token-for-points exchange.
//!
//! Players deposit the arcade token to buy game points, which the game
//! backend credits off-chain. Points are redeemed for tokens with a proof
//! that both the game backend and the arcade backend derived from their
//! shared keys; see [`RedemptionDigest`] for the construction.

mod application;
mod domain;
mod infrastructure;

// Re-export public types for contract interface
pub use domain::{GameConfig, RedemptionClaim, RedemptionDigest, SwapError as Error};

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

use application::{
    BuyGamePointCommand, GetGamePointPriceQuery, HasBackendKeyQuery, HeldBalanceQuery,
    SellGamePointCommand, SetAdminCommand, SetArcadeBackendKeyCommand, SetGameBackendKeyCommand,
    SetGamePointPriceCommand, SetTokenCommand, TransferToCommand,
};
use infrastructure::AdminRepository;

#[contract]
pub struct ArcadeSwap;

#[contractimpl]
impl ArcadeSwap {
    /// Initialize contract with admin and custodied token addresses
    pub fn __constructor(env: Env, admin: Address, token: Address) {
        AdminRepository::set_admin(&env, &admin);
        AdminRepository::set_token(&env, &token);
        AdminRepository::extend_ttl(&env);
    }

    // ==================== Swap Commands ====================

    /// Deposit `amount` tokens for game points on `game_id`.
    ///
    /// The exchange must hold an allowance of at least `amount` from `buyer`.
    pub fn buy_game_point(
        env: Env,
        buyer: Address,
        game_id: u32,
        amount: i128,
    ) -> Result<(), Error> {
        BuyGamePointCommand::execute(&env, buyer, game_id, amount)
    }

    /// Redeem `points` for `points * price` tokens, authorized by `proof`
    pub fn sell_game_point(
        env: Env,
        seller: Address,
        game_id: u32,
        points: i128,
        proof: BytesN<32>,
    ) -> Result<i128, Error> {
        SellGamePointCommand::execute(&env, seller, game_id, points, proof)
    }

    // ==================== Queries ====================

    /// Get the tokens paid per point, `None` if the game is unpriced
    pub fn get_game_point_price(env: Env, game_id: u32) -> Option<i128> {
        GetGamePointPriceQuery::execute(&env, game_id)
    }

    /// Whether a backend key is configured for `game_id`
    pub fn has_game_backend_key(env: Env, game_id: u32) -> bool {
        HasBackendKeyQuery::game(&env, game_id)
    }

    /// Whether the arcade backend key is configured
    pub fn has_arcade_backend_key(env: Env) -> bool {
        HasBackendKeyQuery::arcade(&env)
    }

    /// Tokens currently custodied by the exchange
    pub fn held_balance(env: Env) -> Result<i128, Error> {
        HeldBalanceQuery::execute(&env)
    }

    // ==================== Admin Functions ====================

    /// Replace the arcade-wide backend key
    pub fn set_arcade_backend_key(env: Env, caller: Address, key: String) -> Result<(), Error> {
        SetArcadeBackendKeyCommand::execute(&env, caller, key)
    }

    /// Replace the backend key of `game_id`
    pub fn set_game_backend_key(
        env: Env,
        caller: Address,
        game_id: u32,
        key: String,
    ) -> Result<(), Error> {
        SetGameBackendKeyCommand::execute(&env, caller, game_id, key)
    }

    /// Set the tokens paid per point for `game_id`
    pub fn set_game_point_price(
        env: Env,
        caller: Address,
        game_id: u32,
        price: i128,
    ) -> Result<(), Error> {
        SetGamePointPriceCommand::execute(&env, caller, game_id, price)
    }

    /// Send custodied tokens to `to`
    pub fn transfer_to(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        TransferToCommand::execute(&env, caller, to, amount)
    }

    /// Get the custodied token address
    pub fn get_token(env: Env) -> Result<Address, Error> {
        AdminRepository::get_token(&env)
    }

    /// Point the exchange at a different token contract
    pub fn set_token(env: Env, caller: Address, token: Address) -> Result<(), Error> {
        SetTokenCommand::execute(&env, caller, token)
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        AdminRepository::get_admin(&env)
    }

    /// Hand ownership to `new_admin`
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        SetAdminCommand::execute(&env, caller, new_admin)
    }

    /// Replace the contract wasm
    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        AdminRepository::require_admin(&env, &caller)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }
}
