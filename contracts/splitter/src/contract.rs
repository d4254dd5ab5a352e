use cosmwasm_std::{
    entry_point, to_binary, Addr, Api, BankMsg, Binary, Coin, Deps, DepsMut, Env, MessageInfo,
    Reply, Response, StdResult, Storage, SubMsg, SubMsgResult, Uint128,
};

use crate::error::ContractError;
use crate::guard::{OwnerGuard, PauseGuard};
use crate::msg::{
    BalanceResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, OwnerResponse, PausedResponse,
    QueryMsg, SplitAccess, TotalReservedResponse,
};
use crate::state::{
    Config, PendingWithdrawal, BALANCES, CONFIG, OWNERSHIP, PAUSE, PENDING_WITHDRAWAL,
    TOTAL_RESERVED,
};

use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-splitter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WITHDRAW_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    if msg.native_denom.is_empty() || msg.native_denom.trim() != msg.native_denom {
        return Err(ContractError::InvalidDenom {});
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        native_denom: msg.native_denom,
        split_access: msg.split_access.unwrap_or_default(),
    };
    CONFIG.save(deps.storage, &config)?;
    OWNERSHIP.set(deps.storage, &info.sender)?;
    TOTAL_RESERVED.save(deps.storage, &Uint128::zero())?;

    let res = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("native_denom", config.native_denom);
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SplitFunds {
            recipient_one,
            recipient_two,
        } => try_split_funds(deps, info, recipient_one, recipient_two),
        ExecuteMsg::SplitSurplus {
            recipient_one,
            recipient_two,
        } => try_split_surplus(deps, env, info, recipient_one, recipient_two),
        ExecuteMsg::Withdraw {} => try_withdraw(deps, info),
        ExecuteMsg::Pause {} => try_pause(deps, info),
        ExecuteMsg::Unpause {} => try_unpause(deps, info),
        ExecuteMsg::TransferOwnership { new_owner } => {
            try_transfer_ownership(deps, info, new_owner)
        }
    }
}

pub fn try_split_funds(
    deps: DepsMut,
    info: MessageInfo,
    recipient_one: String,
    recipient_two: String,
) -> Result<Response, ContractError> {
    PAUSE.assert_not_paused(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    if config.split_access == SplitAccess::OwnerOnly {
        OWNERSHIP.assert_owner(deps.storage, &info.sender)?;
    }

    let first = validate_recipient(deps.api, &recipient_one)?;
    let second = validate_recipient(deps.api, &recipient_two)?;

    let amount = paid_amount(&info, &config.native_denom)?;
    if amount.is_zero() {
        return Ok(Response::default());
    }

    credit_split(deps.storage, &first, &second, amount)?;

    let res = Response::new()
        .add_attribute("action", "split_funds")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient_one", first)
        .add_attribute("recipient_two", second)
        .add_attribute("amount", amount);
    Ok(res)
}

pub fn try_split_surplus(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient_one: String,
    recipient_two: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    PAUSE.assert_not_paused(deps.storage)?;
    OWNERSHIP.assert_owner(deps.storage, &info.sender)?;

    let first = validate_recipient(deps.api, &recipient_one)?;
    let second = validate_recipient(deps.api, &recipient_two)?;

    let config = CONFIG.load(deps.storage)?;
    let held = deps
        .querier
        .query_balance(env.contract.address.to_string(), config.native_denom)?;
    let reserved = TOTAL_RESERVED.load(deps.storage)?;
    let surplus = held.amount.saturating_sub(reserved);
    if surplus.is_zero() {
        return Err(ContractError::NoSurplus {});
    }

    credit_split(deps.storage, &first, &second, surplus)?;

    let res = Response::new()
        .add_attribute("action", "split_surplus")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient_one", first)
        .add_attribute("recipient_two", second)
        .add_attribute("amount", surplus);
    Ok(res)
}

/// Halves `amount`, the first share carries the remainder unit of an odd amount.
pub fn split_amount(amount: Uint128) -> (Uint128, Uint128) {
    let half = amount / Uint128::new(2);
    let remainder = amount - half - half;
    (half + remainder, half)
}

fn credit_split(
    storage: &mut dyn Storage,
    first: &Addr,
    second: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let (first_share, second_share) = split_amount(amount);
    credit(storage, first, first_share)?;
    credit(storage, second, second_share)?;
    TOTAL_RESERVED.update(storage, |total| -> Result<_, ContractError> {
        Ok(total.checked_add(amount)?)
    })?;
    Ok(())
}

fn credit(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    BALANCES.update(storage, account, |balance| -> Result<_, ContractError> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}

pub fn try_withdraw(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let amount = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if amount.is_zero() {
        return Err(ContractError::ZeroBalance {});
    }
    let config = CONFIG.load(deps.storage)?;

    // the entry is zeroed before the payout leaves the contract
    BALANCES.save(deps.storage, &info.sender, &Uint128::zero())?;
    TOTAL_RESERVED.update(deps.storage, |total| -> Result<_, ContractError> {
        Ok(total.checked_sub(amount)?)
    })?;
    PENDING_WITHDRAWAL.save(
        deps.storage,
        &PendingWithdrawal {
            account: info.sender.clone(),
            amount,
        },
    )?;

    let bank_send = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: vec![Coin::new(amount.u128(), config.native_denom)],
    };

    let res = Response::new()
        .add_submessage(SubMsg::reply_on_error(bank_send, WITHDRAW_REPLY_ID))
        .add_attribute("action", "withdraw")
        .add_attribute("account", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("balance", Uint128::zero());
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        WITHDRAW_REPLY_ID => handle_withdraw_reply(deps, msg.result),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

/// Only dispatched when the payout fails, a later withdraw overwrites the
/// pending entry of a successful one.
fn handle_withdraw_reply(deps: DepsMut, result: SubMsgResult) -> Result<Response, ContractError> {
    let reason = match result {
        SubMsgResult::Ok(_) => return Ok(Response::new()),
        SubMsgResult::Err(reason) => reason,
    };
    let pending = PENDING_WITHDRAWAL.load(deps.storage)?;
    PENDING_WITHDRAWAL.remove(deps.storage);

    // put the credit back, the error then fails the whole withdraw
    credit(deps.storage, &pending.account, pending.amount)?;
    TOTAL_RESERVED.update(deps.storage, |total| -> Result<_, ContractError> {
        Ok(total.checked_add(pending.amount)?)
    })?;
    Err(ContractError::TransferFailed {
        account: pending.account.into_string(),
        amount: pending.amount,
        reason,
    })
}

pub fn try_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    PAUSE.pause(deps.storage, &OWNERSHIP, &info.sender)?;

    let res = Response::new()
        .add_attribute("action", "pause")
        .add_attribute("sender", info.sender);
    Ok(res)
}

pub fn try_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    PAUSE.unpause(deps.storage, &OWNERSHIP, &info.sender)?;

    let res = Response::new()
        .add_attribute("action", "unpause")
        .add_attribute("sender", info.sender);
    Ok(res)
}

pub fn try_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let new_owner = deps
        .api
        .addr_validate(&new_owner)
        .map_err(|_| ContractError::InvalidOwner {
            address: new_owner.clone(),
        })?;

    let previous = OWNERSHIP.transfer(deps.storage, &info.sender, &new_owner)?;

    let res = Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("previous_owner", previous)
        .add_attribute("new_owner", new_owner);
    Ok(res)
}

fn validate_recipient(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    let invalid = || ContractError::InvalidRecipient {
        address: address.to_string(),
    };
    if address.trim().is_empty() {
        return Err(invalid());
    }
    api.addr_validate(address).map_err(|_| invalid())
}

/// Sums the attached coins, all of which must be in the configured denom.
fn paid_amount(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    info.funds
        .iter()
        .try_fold(Uint128::zero(), |total, coin| -> Result<_, ContractError> {
            if coin.denom != denom {
                return Err(ContractError::UnsupportedDenom {
                    denom: coin.denom.clone(),
                });
            }
            Ok(total.checked_add(coin.amount)?)
        })
}

fn nonpayable(info: &MessageInfo) -> Result<(), ContractError> {
    if info.funds.iter().any(|coin| !coin.amount.is_zero()) {
        return Err(ContractError::NonPayable {});
    }
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_binary(&query_balance(deps, address)?),
        QueryMsg::TotalReserved {} => to_binary(&query_total_reserved(deps)?),
        QueryMsg::Owner {} => to_binary(&OwnerResponse {
            owner: OWNERSHIP.get(deps.storage)?,
        }),
        QueryMsg::Paused {} => to_binary(&PausedResponse {
            paused: PAUSE.is_paused(deps.storage)?,
        }),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
    }
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

fn query_total_reserved(deps: Deps) -> StdResult<TotalReservedResponse> {
    let total = TOTAL_RESERVED.load(deps.storage)?;
    Ok(TotalReservedResponse { total })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: OWNERSHIP.get(deps.storage)?,
        paused: PAUSE.is_paused(deps.storage)?,
        native_denom: config.native_denom,
        split_access: config.split_access,
    })
}
