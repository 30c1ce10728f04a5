mod commands;
mod events;
mod queries;

pub use commands::{
    BuyGamePointCommand, SellGamePointCommand, SetAdminCommand, SetArcadeBackendKeyCommand,
    SetGameBackendKeyCommand, SetGamePointPriceCommand, SetTokenCommand, TransferToCommand,
};
pub use queries::{GetGamePointPriceQuery, HasBackendKeyQuery, HeldBalanceQuery};
