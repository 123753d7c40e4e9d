//! Linear vesting with a cliff.
//!
//! Nothing is vested before `start + cliff`, everything from
//! `start + duration` on, and `total * elapsed / duration` (floored) in
//! between. The result never decreases as `now` grows.

use crate::storage::Schedule;

pub(crate) fn vested_amount(schedule: &Schedule, now: u64) -> i128 {
    let elapsed = match now.checked_sub(schedule.start) {
        Some(elapsed) => elapsed,
        None => return 0,
    };
    if elapsed < schedule.cliff {
        return 0;
    }
    if elapsed >= schedule.duration {
        return schedule.total_allocated;
    }
    linear_share(schedule.total_allocated, elapsed, schedule.duration)
}

/// `floor(total * elapsed / duration)` for `0 <= elapsed < duration` and
/// `total >= 0`, split so that no intermediate product overflows.
fn linear_share(total: i128, elapsed: u64, duration: u64) -> i128 {
    let whole = total / duration as i128;
    let rest = (total % duration as i128) as u128;
    whole * elapsed as i128 + (rest * elapsed as u128 / duration as u128) as i128
}
