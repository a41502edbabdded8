pub(crate) const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
pub(crate) const ONE_DAY_SECONDS: u64 = 24 * 60 * 60;
pub(crate) const MAX_VOTING_DURATION: u64 = 31 * ONE_DAY_SECONDS; // 31 days

/// The fixed-point base for all percentages (100%)
pub const PCT_BASE: u64 = 1_000_000_000_000_000_000;
