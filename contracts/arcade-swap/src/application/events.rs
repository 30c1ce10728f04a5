use soroban_sdk::{contractevent, Address};

// Key material is never published; key events only name what changed.

#[contractevent]
pub struct ArcadeBackendKeySet {
    pub admin: Address,
}

#[contractevent]
pub struct GameBackendKeySet {
    pub game_id: u32,
    pub admin: Address,
}

#[contractevent]
pub struct PointPriceSet {
    pub game_id: u32,
    pub price: i128,
}

#[contractevent]
pub struct TokenSet {
    pub token: Address,
}

#[contractevent]
pub struct AdminChanged {
    pub previous: Address,
    pub admin: Address,
}

/// Emitted when tokens are deposited for off-chain game points
#[contractevent]
pub struct GamePointBought {
    pub buyer: Address,
    pub game_id: u32,
    pub amount: i128,
}

/// Emitted when verified game points are redeemed for tokens
#[contractevent]
pub struct GamePointSold {
    pub seller: Address,
    pub game_id: u32,
    pub points: i128,
    pub token_amount: i128,
}

#[contractevent]
pub struct FundsWithdrawn {
    pub to: Address,
    pub amount: i128,
}
