use soroban_sdk::{contracttype, Address, Env, String};

use crate::domain::{GameConfig, SwapError};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Per-game key and price
    Game(u32),
    /// Arcade-wide backend key
    ArcadeBackendKey,
    /// Token custodied by the exchange
    Token,
    /// Admin address
    Admin,
}

/// TTL for game configuration (~30 days)
pub const GAME_TTL_LEDGERS: u32 = 518_400;
/// Extend once fewer than this many ledgers remain (~7 days)
pub const GAME_TTL_THRESHOLD: u32 = 120_960;
/// TTL for admin, token and arcade key (~30 days)
pub const INSTANCE_TTL_LEDGERS: u32 = 518_400;
pub const INSTANCE_TTL_THRESHOLD: u32 = 120_960;

/// Repository for per-game configuration
pub struct GameRepository;

impl GameRepository {
    /// Loads a game's configuration, unconfigured if never written
    pub fn load(env: &Env, game_id: u32) -> GameConfig {
        let key = DataKey::Game(game_id);
        let config: Option<GameConfig> = env.storage().persistent().get(&key);
        if config.is_some() {
            env.storage()
                .persistent()
                .extend_ttl(&key, GAME_TTL_THRESHOLD, GAME_TTL_LEDGERS);
        }
        config.unwrap_or_else(GameConfig::unconfigured)
    }

    /// Saves a game's configuration with TTL extension
    pub fn save(env: &Env, game_id: u32, config: &GameConfig) {
        let key = DataKey::Game(game_id);
        env.storage().persistent().set(&key, config);
        env.storage()
            .persistent()
            .extend_ttl(&key, GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
    }
}

/// Repository for admin configuration
pub struct AdminRepository;

impl AdminRepository {
    /// Keeps the contract-wide configuration alive
    pub fn extend_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_LEDGERS);
    }

    pub fn get_admin(env: &Env) -> Result<Address, SwapError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(SwapError::NotInitialized)
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }

    /// Checks `caller` is the stored admin and holds its signature
    pub fn require_admin(env: &Env, caller: &Address) -> Result<(), SwapError> {
        let admin = Self::get_admin(env)?;
        if *caller != admin {
            return Err(SwapError::Unauthorized);
        }
        caller.require_auth();
        Self::extend_ttl(env);
        Ok(())
    }

    pub fn get_token(env: &Env) -> Result<Address, SwapError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(SwapError::NotInitialized)
    }

    pub fn set_token(env: &Env, token: &Address) {
        env.storage().instance().set(&DataKey::Token, token);
    }

    pub fn get_arcade_backend_key(env: &Env) -> Option<String> {
        env.storage().instance().get(&DataKey::ArcadeBackendKey)
    }

    pub fn set_arcade_backend_key(env: &Env, key: &String) {
        env.storage()
            .instance()
            .set(&DataKey::ArcadeBackendKey, key);
    }
}

/// Configuration read once per redemption
pub struct ConfigSnapshot {
    pub arcade_backend_key: Option<String>,
    pub game: GameConfig,
    pub token: Address,
}

impl ConfigSnapshot {
    pub fn take(env: &Env, game_id: u32) -> Result<Self, SwapError> {
        AdminRepository::extend_ttl(env);
        Ok(Self {
            arcade_backend_key: AdminRepository::get_arcade_backend_key(env),
            game: GameRepository::load(env, game_id),
            token: AdminRepository::get_token(env)?,
        })
    }
}
