use soroban_sdk::{contracttype, Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec};

use crate::checkpoints::Checkpoint;

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

#[contracttype]
pub enum MockVotesDataKey {
    UserVotes(Address),
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>>(
    e: &Env,
    key: &K,
    default: V,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default
    }
}

/// Get the voting power checkpoints of `user`
///
/// ### Arguments
/// * `user` - The address of the user
pub fn get_user_checkpoints(e: &Env, user: &Address) -> Vec<Checkpoint> {
    let key = MockVotesDataKey::UserVotes(user.clone());
    get_persistent_default::<MockVotesDataKey, Vec<Checkpoint>>(
        e,
        &key,
        Vec::new(e),
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

/// Set the voting power checkpoints of `user`
///
/// ### Arguments
/// * `user` - The address of the user
/// * `checkpoints` - The voting power checkpoints
pub fn set_user_checkpoints(e: &Env, user: &Address, checkpoints: &Vec<Checkpoint>) {
    let key = MockVotesDataKey::UserVotes(user.clone());
    e.storage()
        .persistent()
        .set::<MockVotesDataKey, Vec<Checkpoint>>(&key, checkpoints);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Get the total supply checkpoints
pub fn get_total_supply_checkpoints(e: &Env) -> Vec<Checkpoint> {
    let key = Symbol::new(e, "total_supply");
    get_persistent_default::<Symbol, Vec<Checkpoint>>(
        e,
        &key,
        Vec::new(e),
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

/// Set the total supply checkpoints
///
/// ### Arguments
/// * `checkpoints` - The total supply checkpoints
pub fn set_total_supply_checkpoints(e: &Env, checkpoints: &Vec<Checkpoint>) {
    let key = Symbol::new(e, "total_supply");
    e.storage()
        .persistent()
        .set::<Symbol, Vec<Checkpoint>>(&key, checkpoints);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}
