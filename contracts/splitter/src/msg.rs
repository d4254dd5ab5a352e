use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// The only native coin accepted and paid out
    pub native_denom: String,
    /// Who may split funds, anyone when unset
    pub split_access: Option<SplitAccess>,
}

#[cw_serde]
#[derive(Copy, Default)]
pub enum SplitAccess {
    #[default]
    Anyone,
    OwnerOnly,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Split the attached funds between both recipients.
    /// The first recipient receives the remainder unit of an odd amount.
    SplitFunds {
        recipient_one: String,
        recipient_two: String,
    },
    /// Owner only. Splits the coins held by the contract but not credited
    /// to anyone, such as plain bank sends, the same way as SplitFunds
    SplitSurplus {
        recipient_one: String,
        recipient_two: String,
    },
    /// Pay out the full balance credited to the sender
    Withdraw {},
    /// Owner only. Blocks SplitFunds until unpaused
    Pause {},
    /// Owner only
    Unpause {},
    /// Owner only
    TransferOwnership { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the withdrawable balance of the given address, 0 if unset
    #[returns(BalanceResponse)]
    Balance { address: String },
    /// Returns the sum of all withdrawable balances
    #[returns(TotalReservedResponse)]
    TotalReserved {},
    #[returns(OwnerResponse)]
    Owner {},
    #[returns(PausedResponse)]
    Paused {},
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct TotalReservedResponse {
    pub total: Uint128,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub paused: bool,
    pub native_denom: String,
    pub split_access: SplitAccess,
}
