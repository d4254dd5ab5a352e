use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use crate::guard::{Ownership, Pausable};
use crate::msg::SplitAccess;

#[cw_serde]
pub struct Config {
    pub native_denom: String,
    pub split_access: SplitAccess,
}

/// Payout dispatched by a withdraw and not yet confirmed by its reply
#[cw_serde]
pub struct PendingWithdrawal {
    pub account: Addr,
    pub amount: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const OWNERSHIP: Ownership = Ownership::new("owner");
pub const PAUSE: Pausable = Pausable::new("paused");

/// Withdrawable amount per account, entries are zeroed but never removed
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
/// Always equal to the sum of BALANCES
pub const TOTAL_RESERVED: Item<Uint128> = Item::new("total_reserved");
pub const PENDING_WITHDRAWAL: Item<PendingWithdrawal> = Item::new("pending_withdrawal");
