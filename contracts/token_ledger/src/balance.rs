use soroban_sdk::{Address, Env};

use crate::error::TokenError;
use crate::storage::{extend_account_entry, AllowanceKey, DataKey};

pub(crate) fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            extend_account_entry(env, &key);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    extend_account_entry(env, &key);
}

pub(crate) fn check_spendable(env: &Env, from: &Address, amount: i128) -> Result<i128, TokenError> {
    let balance = read_balance(env, from);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    Ok(balance)
}

pub(crate) fn spend_balance(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = check_spendable(env, from, amount)?;
    write_balance(env, from, balance - amount);
    Ok(())
}

pub(crate) fn receive_balance(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    write_balance(env, to, balance);
    Ok(())
}

/// Moves `amount` between two holders. Self-transfers leave the balance as is.
pub(crate) fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    check_spendable(env, from, amount)?;
    if from == to {
        return Ok(());
    }
    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount)
}

// ---------------------------------------------------------------------------
// Allowances
// ---------------------------------------------------------------------------

fn allowance_key(from: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    })
}

pub(crate) fn read_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let key = allowance_key(from, spender);
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(allowance) => {
            extend_account_entry(env, &key);
            allowance
        }
        None => 0,
    }
}

pub(crate) fn write_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = allowance_key(from, spender);
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    extend_account_entry(env, &key);
}
