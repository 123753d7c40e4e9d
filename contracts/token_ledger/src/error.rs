use soroban_sdk::contracterror;

/// Every way a ledger call can be rejected. A rejected call leaves no trace.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Caller lacks the role or ownership the operation requires.
    Unauthorized = 1,
    InsufficientBalance = 2,
    InsufficientAllowance = 3,
    /// Allowance decrease would go below zero.
    InvalidAllowance = 4,
    SupplyCapExceeded = 5,
    Paused = 6,
    /// Pause requested while paused, or unpause while running.
    AlreadyInState = 7,
    /// Negative amount.
    InvalidAmount = 8,
    /// Constructor arguments violate the supply cap.
    InvalidConfig = 9,
    Overflow = 10,
}
