mod external;
pub mod storage;

pub use external::TokenLedger;
pub use storage::{AdminRepository, ConfigSnapshot, GameRepository};
