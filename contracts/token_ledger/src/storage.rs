use soroban_sdk::{contracttype, Address, Env, String};

use crate::access::Role;

// ---------------------------------------------------------------------------
// Entry lifetimes (in ledgers, ~5s each)
// ---------------------------------------------------------------------------
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const ACCOUNT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ACCOUNT_LIFETIME_THRESHOLD: u32 = ACCOUNT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Display metadata fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct RoleKey {
    pub role: Role,
    pub account: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Metadata,
    SupplyCap,
    TotalSupply,
    Owner,
    Paused,
    MintAuthority,
    Balance(Address),
    Allowance(AllowanceKey),
    Role(RoleKey),
}

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Persistent per-account entries live longer than the instance so that
/// idle holders do not get archived between transfers.
pub(crate) fn extend_account_entry(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, ACCOUNT_LIFETIME_THRESHOLD, ACCOUNT_BUMP_AMOUNT);
}

// ---------------------------------------------------------------------------
// Instance values
// ---------------------------------------------------------------------------

pub(crate) fn read_metadata(env: &Env) -> TokenMetadata {
    env.storage().instance().get(&DataKey::Metadata).unwrap()
}

pub(crate) fn write_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub(crate) fn read_supply_cap(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::SupplyCap).unwrap_or(0)
}

pub(crate) fn write_supply_cap(env: &Env, cap: i128) {
    env.storage().instance().set(&DataKey::SupplyCap, &cap);
}

pub(crate) fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub(crate) fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub(crate) fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub(crate) fn write_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}
