use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::ContractError;

pub trait OwnerGuard {
    /// Fails with `Unauthorized` unless `sender` is the current owner
    fn assert_owner(&self, storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError>;
}

pub trait PauseGuard {
    /// Fails with `Paused` while the contract is paused
    fn assert_not_paused(&self, storage: &dyn Storage) -> Result<(), ContractError>;
}

/// Single owner address kept under its own storage key
pub struct Ownership<'a>(Item<'a, Addr>);

impl<'a> Ownership<'a> {
    pub const fn new(storage_key: &'a str) -> Self {
        Ownership(Item::new(storage_key))
    }

    pub fn set(&self, storage: &mut dyn Storage, owner: &Addr) -> StdResult<()> {
        self.0.save(storage, owner)
    }

    pub fn get(&self, storage: &dyn Storage) -> StdResult<Addr> {
        self.0.load(storage)
    }

    /// Hands ownership to `new_owner` and returns the previous owner
    pub fn transfer(
        &self,
        storage: &mut dyn Storage,
        sender: &Addr,
        new_owner: &Addr,
    ) -> Result<Addr, ContractError> {
        self.assert_owner(storage, sender)?;
        let previous = self.get(storage)?;
        self.set(storage, new_owner)?;
        Ok(previous)
    }
}

impl OwnerGuard for Ownership<'_> {
    fn assert_owner(&self, storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
        if self.get(storage)? != *sender {
            return Err(ContractError::Unauthorized {});
        }
        Ok(())
    }
}

/// Paused flag, an unset flag reads as running
pub struct Pausable<'a>(Item<'a, bool>);

impl<'a> Pausable<'a> {
    pub const fn new(storage_key: &'a str) -> Self {
        Pausable(Item::new(storage_key))
    }

    pub fn is_paused(&self, storage: &dyn Storage) -> StdResult<bool> {
        Ok(self.0.may_load(storage)?.unwrap_or(false))
    }

    pub fn pause(
        &self,
        storage: &mut dyn Storage,
        owner: &impl OwnerGuard,
        sender: &Addr,
    ) -> Result<(), ContractError> {
        owner.assert_owner(storage, sender)?;
        self.assert_not_paused(storage)?;
        Ok(self.0.save(storage, &true)?)
    }

    pub fn unpause(
        &self,
        storage: &mut dyn Storage,
        owner: &impl OwnerGuard,
        sender: &Addr,
    ) -> Result<(), ContractError> {
        owner.assert_owner(storage, sender)?;
        if !self.is_paused(storage)? {
            return Err(ContractError::NotPaused {});
        }
        Ok(self.0.save(storage, &false)?)
    }
}

impl PauseGuard for Pausable<'_> {
    fn assert_not_paused(&self, storage: &dyn Storage) -> Result<(), ContractError> {
        if self.is_paused(storage)? {
            return Err(ContractError::Paused {});
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    const OWNER: Ownership = Ownership::new("owner");
    const PAUSE: Pausable = Pausable::new("paused");

    #[test]
    fn ownership() {
        let mut storage = MockStorage::new();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");

        OWNER.set(&mut storage, &alice).unwrap();
        OWNER.assert_owner(&storage, &alice).unwrap();
        match OWNER.assert_owner(&storage, &bob) {
            Err(ContractError::Unauthorized {}) => {}
            _ => panic!("Must return Unauthorized error"),
        }

        // only the owner can hand over
        match OWNER.transfer(&mut storage, &bob, &bob) {
            Err(ContractError::Unauthorized {}) => {}
            _ => panic!("Must return Unauthorized error"),
        }

        let previous = OWNER.transfer(&mut storage, &alice, &bob).unwrap();
        assert_eq!(alice, previous);
        assert_eq!(bob, OWNER.get(&storage).unwrap());
        assert!(OWNER.assert_owner(&storage, &alice).is_err());
    }

    #[test]
    fn pause_toggle() {
        let mut storage = MockStorage::new();
        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");
        OWNER.set(&mut storage, &alice).unwrap();

        // unset flag reads as running
        assert!(!PAUSE.is_paused(&storage).unwrap());
        PAUSE.assert_not_paused(&storage).unwrap();

        match PAUSE.pause(&mut storage, &OWNER, &bob) {
            Err(ContractError::Unauthorized {}) => {}
            _ => panic!("Must return Unauthorized error"),
        }
        match PAUSE.unpause(&mut storage, &OWNER, &alice) {
            Err(ContractError::NotPaused {}) => {}
            _ => panic!("Must return NotPaused error"),
        }

        PAUSE.pause(&mut storage, &OWNER, &alice).unwrap();
        assert!(PAUSE.is_paused(&storage).unwrap());
        match PAUSE.assert_not_paused(&storage) {
            Err(ContractError::Paused {}) => {}
            _ => panic!("Must return Paused error"),
        }
        match PAUSE.pause(&mut storage, &OWNER, &alice) {
            Err(ContractError::Paused {}) => {}
            _ => panic!("Must return Paused error"),
        }

        match PAUSE.unpause(&mut storage, &OWNER, &bob) {
            Err(ContractError::Unauthorized {}) => {}
            _ => panic!("Must return Unauthorized error"),
        }
        PAUSE.unpause(&mut storage, &OWNER, &alice).unwrap();
        assert!(!PAUSE.is_paused(&storage).unwrap());
    }
}
