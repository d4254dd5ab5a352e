pub mod contract;
mod error;
pub mod guard;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
