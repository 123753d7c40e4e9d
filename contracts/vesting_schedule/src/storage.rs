use soroban_sdk::{contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const SCHEDULE_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const SCHEDULE_LIFETIME_THRESHOLD: u32 = SCHEDULE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Release terms for one beneficiary. Times are ledger timestamps (seconds).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    pub total_allocated: i128,
    pub released: i128,
    pub start: u64,
    /// Seconds from `start` until everything is vested.
    pub duration: u64,
    /// Seconds from `start` during which nothing is vested.
    pub cliff: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Token,
    Outstanding,
    Schedule(Address),
}

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn read_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub(crate) fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub(crate) fn read_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

pub(crate) fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

/// Allocated but not yet released, summed over all schedules.
pub(crate) fn read_outstanding(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Outstanding).unwrap_or(0)
}

pub(crate) fn write_outstanding(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Outstanding, &amount);
}

pub(crate) fn read_schedule(env: &Env, beneficiary: &Address) -> Option<Schedule> {
    let key = DataKey::Schedule(beneficiary.clone());
    let schedule = env.storage().persistent().get::<DataKey, Schedule>(&key);
    if schedule.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, SCHEDULE_LIFETIME_THRESHOLD, SCHEDULE_BUMP_AMOUNT);
    }
    schedule
}

pub(crate) fn write_schedule(env: &Env, beneficiary: &Address, schedule: &Schedule) {
    let key = DataKey::Schedule(beneficiary.clone());
    env.storage().persistent().set(&key, schedule);
    env.storage()
        .persistent()
        .extend_ttl(&key, SCHEDULE_LIFETIME_THRESHOLD, SCHEDULE_BUMP_AMOUNT);
}
