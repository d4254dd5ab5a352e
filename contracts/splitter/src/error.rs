use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid recipient '{address}'")]
    InvalidRecipient { address: String },

    #[error("Invalid owner '{address}'")]
    InvalidOwner { address: String },

    #[error("Native denom must not be empty")]
    InvalidDenom {},

    #[error("Unsupported denom {denom}")]
    UnsupportedDenom { denom: String },

    #[error("This message does not accept funds")]
    NonPayable {},

    #[error("Contract is paused")]
    Paused {},

    #[error("Contract is not paused")]
    NotPaused {},

    #[error("No surplus to split")]
    NoSurplus {},

    #[error("Zero balance")]
    ZeroBalance {},

    #[error("Transfer of {amount} to {account} failed: {reason}")]
    TransferFailed {
        account: String,
        amount: Uint128,
        reason: String,
    },

    #[error("Unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}
