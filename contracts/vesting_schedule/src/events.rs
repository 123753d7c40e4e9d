use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::storage::Schedule;

pub(crate) fn schedule_created(env: &Env, beneficiary: &Address, schedule: &Schedule) {
    env.events().publish(
        (Symbol::new(env, "schedule_created"), beneficiary.clone()),
        (
            schedule.total_allocated,
            schedule.start,
            schedule.duration,
            schedule.cliff,
        ),
    );
}

pub(crate) fn released(env: &Env, beneficiary: &Address, amount: i128, caller: &Address) {
    env.events().publish(
        (symbol_short!("released"), beneficiary.clone()),
        (amount, caller.clone()),
    );
}

pub(crate) fn ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "ownership_transferred"),),
        (previous_owner.clone(), new_owner.clone()),
    );
}
