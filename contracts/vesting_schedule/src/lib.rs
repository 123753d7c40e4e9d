#![no_std]

//! Vault that holds one token and pays it out to beneficiaries on linear
//! schedules with a cliff.
//!
//! The vault is funded with plain token transfers to its own address. Every
//! schedule must be covered by that balance when it is created, and payouts go
//! through the token's public `transfer`, so the vault never touches ledger
//! state directly.

mod curve;
mod error;
mod events;
mod storage;

use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env};

pub use crate::error::VestingError;
pub use crate::storage::Schedule;

use crate::storage::{
    extend_instance, read_outstanding, read_owner, read_schedule, read_token, write_outstanding,
    write_owner, write_schedule, write_token,
};

fn require_owner(env: &Env, caller: &Address) -> Result<Address, VestingError> {
    let owner = read_owner(env);
    if owner != *caller {
        return Err(VestingError::Unauthorized);
    }
    Ok(owner)
}

fn load_schedule(env: &Env, beneficiary: &Address) -> Result<Schedule, VestingError> {
    read_schedule(env, beneficiary).ok_or(VestingError::ScheduleNotFound)
}

fn claimable_at(schedule: &Schedule, now: u64) -> i128 {
    curve::vested_amount(schedule, now) - schedule.released
}

#[contract]
pub struct VestingSchedule;

#[contractimpl]
impl VestingSchedule {
    pub fn __constructor(env: Env, owner: Address, token: Address) {
        write_owner(&env, &owner);
        write_token(&env, &token);
        write_outstanding(&env, 0);
        extend_instance(&env);
    }

    // -----------------------------------------------------------------------
    // Allocation
    // -----------------------------------------------------------------------

    /// Locks `total_allocated` of the vault balance for `beneficiary`.
    ///
    /// The vault must already hold enough tokens for this allocation on top
    /// of everything allocated and not yet released.
    pub fn create_schedule(
        env: Env,
        caller: Address,
        beneficiary: Address,
        total_allocated: i128,
        start: u64,
        duration: u64,
        cliff: u64,
    ) -> Result<(), VestingError> {
        caller.require_auth();
        require_owner(&env, &caller)?;

        if total_allocated <= 0
            || duration == 0
            || cliff > duration
            || start.checked_add(duration).is_none()
        {
            return Err(VestingError::InvalidSchedule);
        }
        if read_schedule(&env, &beneficiary).is_some() {
            return Err(VestingError::ScheduleExists);
        }

        let required = read_outstanding(&env)
            .checked_add(total_allocated)
            .ok_or(VestingError::Overflow)?;
        let funded = TokenClient::new(&env, &read_token(&env)).balance(&env.current_contract_address());
        if funded < required {
            return Err(VestingError::InsufficientFunding);
        }

        let schedule = Schedule {
            total_allocated,
            released: 0,
            start,
            duration,
            cliff,
        };
        write_schedule(&env, &beneficiary, &schedule);
        write_outstanding(&env, required);
        extend_instance(&env);

        log!(&env, "schedule created", beneficiary, total_allocated, required);
        events::schedule_created(&env, &beneficiary, &schedule);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Release
    // -----------------------------------------------------------------------

    /// Pays out whatever has vested since the last release. Anyone may
    /// trigger it; the tokens always go to `beneficiary`.
    pub fn release(env: Env, caller: Address, beneficiary: Address) -> Result<i128, VestingError> {
        caller.require_auth();

        let mut schedule = load_schedule(&env, &beneficiary)?;
        let claimable = claimable_at(&schedule, env.ledger().timestamp());
        if claimable <= 0 {
            return Err(VestingError::NothingToRelease);
        }

        let token = TokenClient::new(&env, &read_token(&env));
        let paid = token.try_transfer(&env.current_contract_address(), &beneficiary, &claimable);
        if !matches!(paid, Ok(Ok(()))) {
            log!(&env, "release transfer rejected", beneficiary, claimable);
            return Err(VestingError::TransferFailed);
        }

        schedule.released += claimable;
        write_schedule(&env, &beneficiary, &schedule);
        write_outstanding(&env, read_outstanding(&env) - claimable);
        extend_instance(&env);

        log!(&env, "released", beneficiary, claimable, schedule.released);
        events::released(&env, &beneficiary, claimable, &caller);
        Ok(claimable)
    }

    // -----------------------------------------------------------------------
    // Ownership
    // -----------------------------------------------------------------------

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), VestingError> {
        caller.require_auth();
        let previous = require_owner(&env, &caller)?;
        extend_instance(&env);

        write_owner(&env, &new_owner);
        events::ownership_transferred(&env, &previous, &new_owner);
        Ok(())
    }

    pub fn owner(env: Env) -> Address {
        read_owner(&env)
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    /// Amount vested at `now`, released or not. Does not read the ledger
    /// clock.
    pub fn vested_amount(env: Env, beneficiary: Address, now: u64) -> Result<i128, VestingError> {
        let schedule = load_schedule(&env, &beneficiary)?;
        Ok(curve::vested_amount(&schedule, now))
    }

    /// What `release` would pay out right now.
    pub fn releasable(env: Env, beneficiary: Address) -> Result<i128, VestingError> {
        let schedule = load_schedule(&env, &beneficiary)?;
        Ok(claimable_at(&schedule, env.ledger().timestamp()))
    }

    pub fn schedule(env: Env, beneficiary: Address) -> Result<Schedule, VestingError> {
        load_schedule(&env, &beneficiary)
    }

    pub fn outstanding(env: Env) -> i128 {
        read_outstanding(&env)
    }

    pub fn token(env: Env) -> Address {
        read_token(&env)
    }
}
