use soroban_sdk::{testutils::Address as _, Address, Env, String};

use token_ledger::{Role, TokenError, TokenLedger, TokenLedgerClient};

const UNIT: i128 = 1_000_000_000_000_000_000;
const SUPPLY_UPPER_LIMIT: i128 = 10_000_000_000 * UNIT;
const INITIAL_SUPPLY: i128 = 3_000_000_000 * UNIT;
const FIFTY: i128 = 50 * UNIT;

fn deploy(env: &Env, owner: &Address) -> TokenLedgerClient<'static> {
    env.mock_all_auths();

    let token_id = env.register(
        TokenLedger,
        (
            owner.clone(),
            String::from_str(env, "SportZchain Token"),
            String::from_str(env, "SPN"),
            18_u32,
            SUPPLY_UPPER_LIMIT,
            INITIAL_SUPPLY,
        ),
    );
    TokenLedgerClient::new(env, &token_id)
}

#[test]
fn deployment_sets_metadata_and_owner() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let token = deploy(&env, &owner);

    assert_eq!(token.name(), String::from_str(&env, "SportZchain Token"));
    assert_eq!(token.symbol(), String::from_str(&env, "SPN"));
    assert_eq!(token.decimals(), 18);
    assert_eq!(token.owner(), Some(owner.clone()));
    assert_eq!(token.balance(&owner), INITIAL_SUPPLY);
    assert_eq!(token.total_supply(), token.balance(&owner));
}

#[test]
fn minting_stops_at_the_supply_limit() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let token = deploy(&env, &owner);

    token.mint(&owner, &owner, &(1_000_000_000 * UNIT));
    assert_eq!(token.balance(&owner), 4_000_000_000 * UNIT);

    token.mint(&owner, &owner, &(6_000_000_000 * UNIT));
    assert_eq!(token.balance(&owner), SUPPLY_UPPER_LIMIT);
    assert_eq!(token.total_supply(), SUPPLY_UPPER_LIMIT);

    assert_eq!(
        token.try_mint(&owner, &owner, &1),
        Err(Ok(TokenError::SupplyCapExceeded))
    );
    assert_eq!(token.total_supply(), SUPPLY_UPPER_LIMIT);
}

#[test]
fn max_mint_on_a_fresh_ledger() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let token = deploy(&env, &owner);

    token.mint(&owner, &owner, &(7_000_000_000 * UNIT));
    assert_eq!(token.total_supply(), SUPPLY_UPPER_LIMIT);

    assert_eq!(
        token.try_mint(&owner, &owner, &1),
        Err(Ok(TokenError::SupplyCapExceeded))
    );
    assert_eq!(token.balance(&owner), SUPPLY_UPPER_LIMIT);
}

#[test]
fn holders_trade_and_spend_allowances() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let addr1 = Address::generate(&env);
    let addr2 = Address::generate(&env);
    let token = deploy(&env, &owner);

    token.transfer(&owner, &addr1, &FIFTY);
    assert_eq!(token.balance(&addr1), FIFTY);
    assert_eq!(
        token.try_transfer(&addr1, &addr2, &(2 * FIFTY)),
        Err(Ok(TokenError::InsufficientBalance))
    );

    assert_eq!(token.try_burn(&addr1, &FIFTY), Err(Ok(TokenError::Unauthorized)));
    assert_eq!(token.try_pause(&addr1), Err(Ok(TokenError::Unauthorized)));

    token.approve(&owner, &addr1, &FIFTY);
    token.increase_allowance(&owner, &addr1, &FIFTY);
    assert_eq!(token.allowance(&owner, &addr1), 2 * FIFTY);
    token.decrease_allowance(&owner, &addr1, &FIFTY);
    assert_eq!(token.allowance(&owner, &addr1), FIFTY);

    token.transfer_from(&addr1, &owner, &addr2, &FIFTY);
    assert_eq!(token.balance(&addr2), FIFTY);
    assert_eq!(token.allowance(&owner, &addr1), 0);
}

#[test]
fn pauser_freezes_and_thaws_transfers() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let pauser = Address::generate(&env);
    let addr1 = Address::generate(&env);
    let token = deploy(&env, &owner);

    token.grant_role(&owner, &Role::Pauser, &pauser);
    token.pause(&pauser);
    assert_eq!(
        token.try_transfer(&owner, &addr1, &FIFTY),
        Err(Ok(TokenError::Paused))
    );
    assert_eq!(token.balance(&addr1), 0);

    token.unpause(&pauser);
    token.transfer(&owner, &addr1, &FIFTY);
    assert_eq!(token.balance(&addr1), FIFTY);
}

#[test]
fn handing_over_a_ledger_to_a_new_owner() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let addr1 = Address::generate(&env);
    let token = deploy(&env, &owner);

    token.grant_role(&owner, &Role::Burner, &owner);
    token.grant_role(&owner, &Role::Pauser, &owner);
    token.burn(&owner, &FIFTY);
    assert_eq!(token.total_supply(), INITIAL_SUPPLY - FIFTY);

    token.grant_role(&owner, &Role::DefaultAdmin, &addr1);
    token.transfer_ownership(&owner, &addr1);
    assert_eq!(token.owner(), Some(addr1.clone()));

    // the previous owner keeps its roles until the new admin strips them
    assert!(token.has_role(&Role::DefaultAdmin, &owner));
    assert!(token.has_role(&Role::Burner, &owner));

    token.revoke_role(&addr1, &Role::DefaultAdmin, &owner);
    token.revoke_role(&addr1, &Role::Burner, &owner);
    token.revoke_role(&addr1, &Role::Pauser, &owner);

    assert!(token.has_role(&Role::DefaultAdmin, &addr1));
    assert!(!token.has_role(&Role::DefaultAdmin, &owner));
    assert!(!token.has_role(&Role::Burner, &owner));
    assert!(!token.has_role(&Role::Pauser, &owner));
    assert_eq!(
        token.try_grant_role(&owner, &Role::Minter, &owner),
        Err(Ok(TokenError::Unauthorized))
    );
}

#[test]
fn independent_ledgers_do_not_share_state() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let other_owner = Address::generate(&env);
    let first = deploy(&env, &owner);
    let second = deploy(&env, &other_owner);

    first.grant_role(&owner, &Role::Pauser, &owner);
    first.pause(&owner);

    assert!(first.paused());
    assert!(!second.paused());
    assert_eq!(second.balance(&owner), 0);
    assert!(!second.has_role(&Role::DefaultAdmin, &owner));
    second.transfer(&other_owner, &owner, &FIFTY);
    assert_eq!(first.balance(&owner), INITIAL_SUPPLY);
}
