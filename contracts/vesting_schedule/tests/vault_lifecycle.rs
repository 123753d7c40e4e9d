use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use token_ledger::{TokenLedger, TokenLedgerClient};
use vesting_schedule::{VestingError, VestingSchedule, VestingScheduleClient};

const UNIT: i128 = 1_000_000_000_000_000_000;
const SUPPLY: i128 = 10_000_000_000 * UNIT;
const MONTH: u64 = 30 * 24 * 60 * 60;

fn deploy(env: &Env, owner: &Address) -> (TokenLedgerClient<'static>, VestingScheduleClient<'static>) {
    env.mock_all_auths();

    let token_id = env.register(
        TokenLedger,
        (
            owner.clone(),
            String::from_str(env, "SportZchain Token"),
            String::from_str(env, "SPN"),
            18_u32,
            SUPPLY,
            SUPPLY,
        ),
    );
    let vesting_id = env.register(VestingSchedule, (owner.clone(), token_id.clone()));

    (
        TokenLedgerClient::new(env, &token_id),
        VestingScheduleClient::new(env, &vesting_id),
    )
}

#[test]
fn team_allocations_vest_over_a_year() {
    let env = Env::default();
    env.ledger().set_timestamp(1_700_000_000);
    let owner = Address::generate(&env);
    let (token, vesting) = deploy(&env, &owner);

    let founder = Address::generate(&env);
    let advisor = Address::generate(&env);
    let start = env.ledger().timestamp();

    token.transfer(&owner, &vesting.address, &(1_500_000_000 * UNIT));
    vesting.create_schedule(&owner, &founder, &(1_200_000_000 * UNIT), &start, &(12 * MONTH), &(3 * MONTH));
    vesting.create_schedule(&owner, &advisor, &(300_000_000 * UNIT), &start, &(6 * MONTH), &0);
    assert_eq!(vesting.outstanding(), 1_500_000_000 * UNIT);

    env.ledger().set_timestamp(start + 2 * MONTH);
    assert_eq!(
        vesting.try_release(&founder, &founder),
        Err(Ok(VestingError::NothingToRelease))
    );
    assert_eq!(vesting.release(&advisor, &advisor), 100_000_000 * UNIT);

    env.ledger().set_timestamp(start + 6 * MONTH);
    assert_eq!(vesting.release(&founder, &founder), 600_000_000 * UNIT);
    assert_eq!(vesting.release(&advisor, &advisor), 200_000_000 * UNIT);

    env.ledger().set_timestamp(start + 12 * MONTH);
    assert_eq!(vesting.release(&owner, &founder), 600_000_000 * UNIT);

    assert_eq!(token.balance(&founder), 1_200_000_000 * UNIT);
    assert_eq!(token.balance(&advisor), 300_000_000 * UNIT);
    assert_eq!(token.balance(&vesting.address), 0);
    assert_eq!(vesting.outstanding(), 0);
    assert_eq!(token.total_supply(), SUPPLY);
}

#[test]
fn vault_balance_always_covers_outstanding() {
    let env = Env::default();
    env.ledger().set_timestamp(10_000);
    let owner = Address::generate(&env);
    let (token, vesting) = deploy(&env, &owner);

    let beneficiaries: [Address; 3] = core::array::from_fn(|_| Address::generate(&env));
    token.transfer(&owner, &vesting.address, &3_000);
    for (i, beneficiary) in beneficiaries.iter().enumerate() {
        let cliff = 10 * i as u64;
        vesting.create_schedule(&owner, beneficiary, &1_000, &10_000, &(100 + 50 * i as u64), &cliff);
    }
    assert_eq!(
        vesting.try_create_schedule(&owner, &owner, &1, &10_000, &10, &0),
        Err(Ok(VestingError::InsufficientFunding))
    );

    for now in (10_000..10_260).step_by(13) {
        env.ledger().set_timestamp(now);
        for beneficiary in beneficiaries.iter() {
            let _ = vesting.try_release(&owner, beneficiary);
            let schedule = vesting.schedule(beneficiary);
            assert!(schedule.released <= vesting.vested_amount(beneficiary, &now));
            assert!(schedule.released <= schedule.total_allocated);
        }
        assert_eq!(token.balance(&vesting.address), vesting.outstanding());
    }
}
