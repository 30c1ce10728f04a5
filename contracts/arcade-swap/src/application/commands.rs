use soroban_sdk::{Address, BytesN, Env, String};

use crate::domain::{ensure_key, PointPrice, RedemptionClaim, RedemptionDigest, SwapError};
use crate::infrastructure::{AdminRepository, ConfigSnapshot, GameRepository, TokenLedger};

use super::events::{
    AdminChanged, ArcadeBackendKeySet, FundsWithdrawn, GameBackendKeySet, GamePointBought,
    GamePointSold, PointPriceSet, TokenSet,
};

/// Command: Replace the arcade-wide backend key
pub struct SetArcadeBackendKeyCommand;

impl SetArcadeBackendKeyCommand {
    pub fn execute(env: &Env, caller: Address, key: String) -> Result<(), SwapError> {
        AdminRepository::require_admin(env, &caller)?;
        ensure_key(&key)?;

        AdminRepository::set_arcade_backend_key(env, &key);
        ArcadeBackendKeySet { admin: caller }.publish(env);
        Ok(())
    }
}

/// Command: Replace a game's backend key
pub struct SetGameBackendKeyCommand;

impl SetGameBackendKeyCommand {
    pub fn execute(env: &Env, caller: Address, game_id: u32, key: String) -> Result<(), SwapError> {
        AdminRepository::require_admin(env, &caller)?;

        let mut game = GameRepository::load(env, game_id);
        game.set_backend_key(key)?;
        GameRepository::save(env, game_id, &game);

        GameBackendKeySet {
            game_id,
            admin: caller,
        }
        .publish(env);
        Ok(())
    }
}

/// Command: Set the token payout per point for a game
pub struct SetGamePointPriceCommand;

impl SetGamePointPriceCommand {
    pub fn execute(env: &Env, caller: Address, game_id: u32, price: i128) -> Result<(), SwapError> {
        AdminRepository::require_admin(env, &caller)?;
        let price = PointPrice::new(price)?;

        let mut game = GameRepository::load(env, game_id);
        game.set_point_price(price);
        GameRepository::save(env, game_id, &game);

        PointPriceSet {
            game_id,
            price: price.value(),
        }
        .publish(env);
        Ok(())
    }
}

/// Command: Point the exchange at a different token contract
pub struct SetTokenCommand;

impl SetTokenCommand {
    pub fn execute(env: &Env, caller: Address, token: Address) -> Result<(), SwapError> {
        AdminRepository::require_admin(env, &caller)?;

        AdminRepository::set_token(env, &token);
        TokenSet { token }.publish(env);
        Ok(())
    }
}

/// Command: Hand ownership to a new admin
pub struct SetAdminCommand;

impl SetAdminCommand {
    pub fn execute(env: &Env, caller: Address, new_admin: Address) -> Result<(), SwapError> {
        AdminRepository::require_admin(env, &caller)?;

        AdminRepository::set_admin(env, &new_admin);
        AdminChanged {
            previous: caller,
            admin: new_admin,
        }
        .publish(env);
        Ok(())
    }
}

/// Command: Move custodied tokens out on the admin's behalf
pub struct TransferToCommand;

impl TransferToCommand {
    pub fn execute(env: &Env, caller: Address, to: Address, amount: i128) -> Result<(), SwapError> {
        AdminRepository::require_admin(env, &caller)?;

        let token = AdminRepository::get_token(env)?;
        TokenLedger::new(env, &token).withdraw(&to, amount)?;

        FundsWithdrawn { to, amount }.publish(env);
        Ok(())
    }
}

/// Command: Deposit tokens to be credited as game points off-chain
pub struct BuyGamePointCommand;

impl BuyGamePointCommand {
    pub fn execute(env: &Env, buyer: Address, game_id: u32, amount: i128) -> Result<(), SwapError> {
        buyer.require_auth();
        AdminRepository::extend_ttl(env);

        let token = AdminRepository::get_token(env)?;
        TokenLedger::new(env, &token).deposit(&buyer, amount)?;

        GamePointBought {
            buyer,
            game_id,
            amount,
        }
        .publish(env);
        Ok(())
    }
}

/// Command: Redeem backend-approved game points for tokens
pub struct SellGamePointCommand;

impl SellGamePointCommand {
    /// Returns the token amount paid to `seller`
    pub fn execute(
        env: &Env,
        seller: Address,
        game_id: u32,
        points: i128,
        proof: BytesN<32>,
    ) -> Result<i128, SwapError> {
        seller.require_auth();

        if points <= 0 {
            return Err(SwapError::InvalidPoints);
        }

        // All checks below use this single read of configuration
        let snapshot = ConfigSnapshot::take(env, game_id)?;
        let price = snapshot.game.price()?;

        let claim = RedemptionClaim::new(game_id, seller, points, proof);
        RedemptionDigest::verify(
            env,
            &claim,
            snapshot.game.backend_key.as_ref(),
            snapshot.arcade_backend_key.as_ref(),
        )?;

        let token_amount = price.quote(claim.points)?;
        TokenLedger::new(env, &snapshot.token).withdraw(&claim.claimant, token_amount)?;

        GamePointSold {
            seller: claim.claimant,
            game_id,
            points,
            token_amount,
        }
        .publish(env);
        Ok(token_amount)
    }
}
