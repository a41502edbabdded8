use soroban_sdk::{panic_with_error, Env};

use crate::{
    constants::{MAX_VOTING_DURATION, PCT_BASE},
    errors::VotingError,
    types::VotingSettings,
};

/// Validate the voting settings fit within the allowed ranges
///
/// ### Arguments
/// * `settings` - The settings for the voting contract
///
/// ### Panics
/// * If the support required is greater than or equal to 100%
/// * If the minimum quorum is greater than the support required
/// * If the voting duration is zero or greater than the maximum voting duration
pub fn require_valid_settings(e: &Env, settings: &VotingSettings) {
    require_valid_thresholds(e, settings.support_required_pct, settings.min_quorum_pct);
    require_valid_duration(e, settings.voting_duration);
}

/// Validate `0 <= min_quorum_pct <= support_required_pct < PCT_BASE`
pub fn require_valid_thresholds(e: &Env, support_required_pct: u64, min_quorum_pct: u64) {
    if support_required_pct >= PCT_BASE || min_quorum_pct > support_required_pct {
        panic_with_error!(e, VotingError::InvalidThresholdError)
    }
}

/// Validate the voting duration is non-zero and within the maximum
pub fn require_valid_duration(e: &Env, voting_duration: u64) {
    if voting_duration == 0 || voting_duration > MAX_VOTING_DURATION {
        panic_with_error!(e, VotingError::InvalidSettingsError)
    }
}
