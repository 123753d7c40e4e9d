use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VestingError {
    /// Caller is not the vesting owner.
    Unauthorized = 1,
    /// Vault balance does not cover every outstanding allocation.
    InsufficientFunding = 2,
    NothingToRelease = 3,
    /// The token ledger rejected the payout.
    TransferFailed = 4,
    /// Non-positive amount, zero duration, cliff past the end, or an end
    /// time that does not fit in a `u64`.
    InvalidSchedule = 5,
    ScheduleExists = 6,
    ScheduleNotFound = 7,
    Overflow = 8,
}
