use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Share of the target that marks a goal as achieved
pub const DEFAULT_ACHIEVEMENT_THRESHOLD: Decimal = dec!(0.8);

/// Days before the deadline at which a goal is flagged as near its deadline
pub const DEFAULT_NEAR_DEADLINE_DAYS: i64 = 7;

/// Decimal scale of stored amounts (matches the contract mirror, 18,8)
pub const AMOUNT_SCALE: u32 = 8;

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Number of entries returned by the activity feed when no limit is given
pub const DEFAULT_ACTIVITY_LIMIT: usize = 20;

/// Environment key overriding the achievement threshold
pub const ENV_ACHIEVEMENT_THRESHOLD: &str = "FAMILYSAVER_ACHIEVEMENT_THRESHOLD";

/// Environment key overriding the near-deadline window
pub const ENV_NEAR_DEADLINE_DAYS: &str = "FAMILYSAVER_NEAR_DEADLINE_DAYS";
