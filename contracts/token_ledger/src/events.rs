use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::access::{MintAuthority, Role};

/// `from == None` is a mint, `to == None` a burn.
pub(crate) fn transfer(env: &Env, from: Option<Address>, to: Option<Address>, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), from, to), amount);
}

pub(crate) fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("approve"), owner.clone(), spender.clone()), amount);
}

pub(crate) fn role_granted(env: &Env, role: Role, account: &Address, sender: &Address) {
    env.events().publish(
        (Symbol::new(env, "role_granted"), account.clone()),
        (role, sender.clone()),
    );
}

pub(crate) fn role_revoked(env: &Env, role: Role, account: &Address, sender: &Address) {
    env.events().publish(
        (Symbol::new(env, "role_revoked"), account.clone()),
        (role, sender.clone()),
    );
}

pub(crate) fn ownership_transferred(
    env: &Env,
    previous_owner: Option<Address>,
    new_owner: Option<Address>,
) {
    env.events().publish(
        (Symbol::new(env, "ownership_transferred"),),
        (previous_owner, new_owner),
    );
}

pub(crate) fn paused(env: &Env, caller: &Address) {
    env.events().publish((symbol_short!("paused"),), caller.clone());
}

pub(crate) fn unpaused(env: &Env, caller: &Address) {
    env.events().publish((symbol_short!("unpaused"),), caller.clone());
}

pub(crate) fn mint_authority(env: &Env, caller: &Address, authority: MintAuthority) {
    env.events().publish(
        (Symbol::new(env, "mint_authority"),),
        (caller.clone(), authority),
    );
}
