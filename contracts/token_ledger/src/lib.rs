#![no_std]

//! Capped fungible token with pause switch, role-gated supply changes and a
//! single owner layered on top of the role table.
//!
//! `transfer` and `balance` keep the signatures of the Soroban token
//! interface, so other contracts can move this token through
//! `soroban_sdk::token::TokenClient`.

mod access;
mod balance;
mod error;
mod events;
mod storage;

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};

pub use crate::access::{MintAuthority, Role};
pub use crate::error::TokenError;
pub use crate::storage::TokenMetadata;

use crate::access::{
    has_role, read_mint_authority, read_owner, require_minter, require_owner, require_role,
    set_role, write_mint_authority, write_owner,
};
use crate::balance::{
    check_spendable, move_balance, read_allowance, read_balance, receive_balance, spend_balance,
    write_allowance,
};
use crate::storage::{
    extend_instance, is_paused, read_metadata, read_supply_cap, read_total_supply,
    write_metadata, write_paused, write_supply_cap, write_total_supply,
};

fn check_nonnegative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

fn ensure_not_paused(env: &Env) -> Result<(), TokenError> {
    if is_paused(env) {
        return Err(TokenError::Paused);
    }
    Ok(())
}

#[contract]
pub struct TokenLedger;

#[contractimpl]
impl TokenLedger {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Mints `initial_supply` to `owner`, who becomes the owner and the only
    /// `DefaultAdmin`.
    pub fn __constructor(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimals: u32,
        supply_upper_limit: i128,
        initial_supply: i128,
    ) {
        if supply_upper_limit < 0 || initial_supply < 0 || initial_supply > supply_upper_limit {
            panic_with_error!(&env, TokenError::InvalidConfig);
        }

        write_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        write_supply_cap(&env, supply_upper_limit);
        write_mint_authority(&env, MintAuthority::OwnerOrMinter);

        write_owner(&env, Some(&owner));
        events::ownership_transferred(&env, None, Some(owner.clone()));

        set_role(&env, Role::DefaultAdmin, &owner, true);
        events::role_granted(&env, Role::DefaultAdmin, &owner, &owner);

        receive_balance(&env, &owner, initial_supply).unwrap_or_else(|e| panic_with_error!(&env, e));
        write_total_supply(&env, initial_supply);
        events::transfer(&env, None, Some(owner), initial_supply);

        extend_instance(&env);
    }

    // -----------------------------------------------------------------------
    // Transfers and allowances
    // -----------------------------------------------------------------------

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_nonnegative(amount)?;
        extend_instance(&env);
        ensure_not_paused(&env)?;

        move_balance(&env, &from, &to, amount)?;
        events::transfer(&env, Some(from), Some(to), amount);
        Ok(())
    }

    /// Spends `spender`'s allowance over `from`. The allowance is only
    /// consumed when the balance also covers the amount.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_nonnegative(amount)?;
        extend_instance(&env);
        ensure_not_paused(&env)?;

        let allowance = read_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(TokenError::InsufficientAllowance);
        }
        check_spendable(&env, &from, amount)?;

        write_allowance(&env, &from, &spender, allowance - amount);
        move_balance(&env, &from, &to, amount)?;
        events::transfer(&env, Some(from), Some(to), amount);
        Ok(())
    }

    /// Overwrites the allowance, whatever it was before.
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), TokenError> {
        owner.require_auth();
        check_nonnegative(amount)?;
        extend_instance(&env);

        write_allowance(&env, &owner, &spender, amount);
        events::approve(&env, &owner, &spender, amount);
        Ok(())
    }

    pub fn increase_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        delta: i128,
    ) -> Result<(), TokenError> {
        owner.require_auth();
        check_nonnegative(delta)?;
        extend_instance(&env);

        let allowance = read_allowance(&env, &owner, &spender)
            .checked_add(delta)
            .ok_or(TokenError::Overflow)?;
        write_allowance(&env, &owner, &spender, allowance);
        events::approve(&env, &owner, &spender, allowance);
        Ok(())
    }

    /// Rejects rather than flooring at zero.
    pub fn decrease_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        delta: i128,
    ) -> Result<(), TokenError> {
        owner.require_auth();
        check_nonnegative(delta)?;
        extend_instance(&env);

        let current = read_allowance(&env, &owner, &spender);
        if current < delta {
            return Err(TokenError::InvalidAllowance);
        }
        let allowance = current - delta;
        write_allowance(&env, &owner, &spender, allowance);
        events::approve(&env, &owner, &spender, allowance);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Supply
    // -----------------------------------------------------------------------

    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        require_minter(&env, &caller)?;
        check_nonnegative(amount)?;
        extend_instance(&env);
        ensure_not_paused(&env)?;

        let supply = read_total_supply(&env)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        if supply > read_supply_cap(&env) {
            return Err(TokenError::SupplyCapExceeded);
        }

        receive_balance(&env, &to, amount)?;
        write_total_supply(&env, supply);
        log!(&env, "minted", to, amount, supply);
        events::transfer(&env, None, Some(to), amount);
        Ok(())
    }

    /// Destroys `amount` of the caller's own balance.
    pub fn burn(env: Env, caller: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        require_role(&env, Role::Burner, &caller)?;
        check_nonnegative(amount)?;
        extend_instance(&env);
        ensure_not_paused(&env)?;

        spend_balance(&env, &caller, amount)?;
        let supply = read_total_supply(&env) - amount;
        write_total_supply(&env, supply);
        log!(&env, "burned", caller, amount, supply);
        events::transfer(&env, Some(caller), None, amount);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Pause switch
    // -----------------------------------------------------------------------

    pub fn pause(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        require_role(&env, Role::Pauser, &caller)?;
        if is_paused(&env) {
            return Err(TokenError::AlreadyInState);
        }
        extend_instance(&env);

        write_paused(&env, true);
        log!(&env, "paused by", caller);
        events::paused(&env, &caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        require_role(&env, Role::Pauser, &caller)?;
        if !is_paused(&env) {
            return Err(TokenError::AlreadyInState);
        }
        extend_instance(&env);

        write_paused(&env, false);
        log!(&env, "unpaused by", caller);
        events::unpaused(&env, &caller);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Roles
    // -----------------------------------------------------------------------

    /// Granting a role the account already holds succeeds without an event.
    pub fn grant_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), TokenError> {
        caller.require_auth();
        require_role(&env, Role::DefaultAdmin, &caller)?;
        extend_instance(&env);

        if set_role(&env, role, &account, true) {
            log!(&env, "role granted", role, account);
            events::role_granted(&env, role, &account, &caller);
        }
        Ok(())
    }

    pub fn revoke_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), TokenError> {
        caller.require_auth();
        require_role(&env, Role::DefaultAdmin, &caller)?;
        extend_instance(&env);

        if set_role(&env, role, &account, false) {
            log!(&env, "role revoked", role, account);
            events::role_revoked(&env, role, &account, &caller);
        }
        Ok(())
    }

    /// Drops one of the caller's own roles. Needs no admin.
    pub fn renounce_role(env: Env, caller: Address, role: Role) {
        caller.require_auth();
        extend_instance(&env);

        if set_role(&env, role, &caller, false) {
            events::role_revoked(&env, role, &caller, &caller);
        }
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        has_role(&env, role, &account)
    }

    pub fn set_mint_authority(
        env: Env,
        caller: Address,
        authority: MintAuthority,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        require_role(&env, Role::DefaultAdmin, &caller)?;
        extend_instance(&env);

        write_mint_authority(&env, authority);
        events::mint_authority(&env, &caller, authority);
        Ok(())
    }

    pub fn mint_authority(env: Env) -> MintAuthority {
        read_mint_authority(&env)
    }

    // -----------------------------------------------------------------------
    // Ownership
    // -----------------------------------------------------------------------

    /// Role memberships stay where they are; move them with
    /// `grant_role`/`revoke_role`.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), TokenError> {
        caller.require_auth();
        let previous = require_owner(&env, &caller)?;
        extend_instance(&env);

        write_owner(&env, Some(&new_owner));
        log!(&env, "ownership transferred", previous, new_owner);
        events::ownership_transferred(&env, Some(previous), Some(new_owner));
        Ok(())
    }

    /// Leaves the ledger without an owner for good.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        let previous = require_owner(&env, &caller)?;
        extend_instance(&env);

        write_owner(&env, None);
        events::ownership_transferred(&env, Some(previous), None);
        Ok(())
    }

    pub fn owner(env: Env) -> Option<Address> {
        read_owner(&env)
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn supply_upper_limit(env: Env) -> i128 {
        read_supply_cap(&env)
    }

    pub fn paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn name(env: Env) -> String {
        read_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        read_metadata(&env).symbol
    }

    pub fn decimals(env: Env) -> u32 {
        read_metadata(&env).decimals
    }
}
