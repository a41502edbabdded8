use soroban_sdk::{Env, I256};

use crate::constants::PCT_BASE;

/// Check if `value / total` is strictly greater than `pct / PCT_BASE`.
///
/// Returns false if `total` is zero. The comparison is done as
/// `value * PCT_BASE > pct * total`, falling back to 256 bit math
/// if either product overflows an i128.
///
/// ### Arguments
/// * `value` - The numerator of the ratio
/// * `total` - The denominator of the ratio
/// * `pct` - The percentage to compare against, with `PCT_BASE` as 100%
pub fn passes_threshold(e: &Env, value: i128, total: i128, pct: u64) -> bool {
    if total == 0 {
        return false;
    }
    let base = PCT_BASE as i128;
    let pct = pct as i128;
    match (value.checked_mul(base), pct.checked_mul(total)) {
        (Some(computed), Some(required)) => computed > required,
        _ => {
            let computed = I256::from_i128(e, value).mul(&I256::from_i128(e, base));
            let required = I256::from_i128(e, pct).mul(&I256::from_i128(e, total));
            computed > required
        }
    }
}
