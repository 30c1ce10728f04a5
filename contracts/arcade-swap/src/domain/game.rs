use soroban_sdk::{contracttype, String};

use super::errors::SwapError;
use super::price::PointPrice;

/// Per-game configuration owned by the admin
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    /// Shared secret of the game backend
    pub backend_key: Option<String>,
    /// Token units per point, zero until priced
    pub point_price: i128,
}

impl GameConfig {
    /// Configuration of a game nobody has touched yet
    pub fn unconfigured() -> Self {
        Self {
            backend_key: None,
            point_price: 0,
        }
    }

    pub fn set_backend_key(&mut self, key: String) -> Result<(), SwapError> {
        ensure_key(&key)?;
        self.backend_key = Some(key);
        Ok(())
    }

    pub fn set_point_price(&mut self, price: PointPrice) {
        self.point_price = price.value();
    }

    pub fn price(&self) -> Result<PointPrice, SwapError> {
        PointPrice::configured(self.point_price)
    }
}

/// Keys are folded into the digest, so an empty one is never accepted
pub fn ensure_key(key: &String) -> Result<(), SwapError> {
    if key.len() == 0 {
        return Err(SwapError::InvalidKey);
    }
    Ok(())
}
