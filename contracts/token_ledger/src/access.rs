//! Two independent authorisation layers: a role table and a single owner.
//!
//! Neither layer implies the other. Handing over ownership leaves every role
//! membership where it was; revoking `DefaultAdmin` from the owner does not
//! touch ownership.

use soroban_sdk::{contracttype, Address, Env};

use crate::error::TokenError;
use crate::storage::{extend_account_entry, DataKey, RoleKey};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// Grants and revokes every role, itself included.
    DefaultAdmin,
    Minter,
    Burner,
    Pauser,
}

/// Who may call `mint`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MintAuthority {
    MinterRole,
    Owner,
    OwnerOrMinter,
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

fn role_key(role: Role, account: &Address) -> DataKey {
    DataKey::Role(RoleKey {
        role,
        account: account.clone(),
    })
}

pub(crate) fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    let key = role_key(role, account);
    let held = env.storage().persistent().get(&key).unwrap_or(false);
    if held {
        extend_account_entry(env, &key);
    }
    held
}

/// Sets membership and reports whether it changed.
pub(crate) fn set_role(env: &Env, role: Role, account: &Address, granted: bool) -> bool {
    if has_role(env, role, account) == granted {
        return false;
    }
    let key = role_key(role, account);
    if granted {
        env.storage().persistent().set(&key, &true);
        extend_account_entry(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
    true
}

pub(crate) fn require_role(env: &Env, role: Role, account: &Address) -> Result<(), TokenError> {
    if has_role(env, role, account) {
        Ok(())
    } else {
        Err(TokenError::Unauthorized)
    }
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

pub(crate) fn read_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub(crate) fn write_owner(env: &Env, owner: Option<&Address>) {
    match owner {
        Some(owner) => env.storage().instance().set(&DataKey::Owner, owner),
        None => env.storage().instance().remove(&DataKey::Owner),
    }
}

pub(crate) fn is_owner(env: &Env, account: &Address) -> bool {
    read_owner(env).as_ref() == Some(account)
}

/// Returns the current owner when `caller` is it.
pub(crate) fn require_owner(env: &Env, caller: &Address) -> Result<Address, TokenError> {
    match read_owner(env) {
        Some(owner) if owner == *caller => Ok(owner),
        _ => Err(TokenError::Unauthorized),
    }
}

// ---------------------------------------------------------------------------
// Mint policy
// ---------------------------------------------------------------------------

pub(crate) fn read_mint_authority(env: &Env) -> MintAuthority {
    env.storage()
        .instance()
        .get(&DataKey::MintAuthority)
        .unwrap_or(MintAuthority::OwnerOrMinter)
}

pub(crate) fn write_mint_authority(env: &Env, authority: MintAuthority) {
    env.storage().instance().set(&DataKey::MintAuthority, &authority);
}

pub(crate) fn require_minter(env: &Env, caller: &Address) -> Result<(), TokenError> {
    let allowed = match read_mint_authority(env) {
        MintAuthority::MinterRole => has_role(env, Role::Minter, caller),
        MintAuthority::Owner => is_owner(env, caller),
        MintAuthority::OwnerOrMinter => {
            is_owner(env, caller) || has_role(env, Role::Minter, caller)
        }
    };
    if allowed {
        Ok(())
    } else {
        Err(TokenError::Unauthorized)
    }
}
