use chrono::{DateTime, Duration, Utc};

use crate::constants::MILLIS_PER_DAY;

/// Whole days left until `deadline`, rounded up.
///
/// Any remaining fraction of a day counts as a full day. Negative once the
/// deadline has passed.
pub fn days_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (deadline - now).num_milliseconds();
    ceil_div(millis, MILLIS_PER_DAY)
}

/// Deadline for a goal created at `created_at` running for `duration_in_days`.
pub fn deadline_after(created_at: DateTime<Utc>, duration_in_days: i64) -> Option<DateTime<Utc>> {
    created_at.checked_add_signed(Duration::try_days(duration_in_days)?)
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    if numerator % denominator > 0 {
        quotient + 1
    } else {
        quotient
    }
}
