mod claim;
mod digest;
mod errors;
mod game;
mod price;

pub use claim::RedemptionClaim;
pub use digest::RedemptionDigest;
pub use errors::SwapError;
pub use game::{ensure_key, GameConfig};
pub use price::{ensure_positive_amount, PointPrice};
