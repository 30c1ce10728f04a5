use soroban_sdk::{Address, BytesN};

/// Inputs of a single redemption, never persisted
#[derive(Clone, Debug)]
pub struct RedemptionClaim {
    pub game_id: u32,
    pub claimant: Address,
    pub points: i128,
    pub proof: BytesN<32>,
}

impl RedemptionClaim {
    pub fn new(game_id: u32, claimant: Address, points: i128, proof: BytesN<32>) -> Self {
        Self {
            game_id,
            claimant,
            points,
            proof,
        }
    }
}
