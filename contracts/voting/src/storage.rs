use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, Symbol, TryFromVal, Val,
};

use crate::{
    constants::ONE_DAY_LEDGERS,
    types::{Ballot, ProposalConfig, ProposalData, VoteCount, VoterState, VotingSettings},
};

const VOTES_ADDRESS_KEY: &str = "Votes";
const ADMIN_KEY: &str = "Admin";
const SNAPSHOT_MINTER_KEY: &str = "SnapMinter";
const SETTINGS_KEY: &str = "Settings";
const SETTINGS_VERSION_KEY: &str = "SetVersion";
const IS_INIT_KEY: &str = "IsInit";
const PROPOSAL_ID_KEY: &str = "ProposalId";

const LEDGER_THRESHOLD_SHARED: u32 = 14 * ONE_DAY_LEDGERS;
const LEDGER_BUMP_SHARED: u32 = 15 * ONE_DAY_LEDGERS;
const LEDGER_THRESHOLD_PROPOSAL: u32 = 30 * ONE_DAY_LEDGERS;
const LEDGER_BUMP_PROPOSAL: u32 = 31 * ONE_DAY_LEDGERS;

//********** Storage Keys **********//

// Key for storing a voter's ballot
#[derive(Clone)]
#[contracttype]
pub struct VoterStatusKey {
    pub proposal_id: u32,
    pub voter: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum VotingDataKey {
    // The immutable content of a proposal
    Config(u32),
    // The frozen parameters and execution flag of a proposal
    Data(u32),
    // The voter's ballot
    VoterStatus(VoterStatusKey),
    // The proposal results
    ProposalVotes(u32),
}

//********** Storage Utils **********//

/// Bump the instance lifetime by the defined amount
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
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

/// Fetch an entry in persistent storage and bump it if it exists
fn get_persistent<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>>(e: &Env, key: &K) -> Option<V> {
    let result = e.storage().persistent().get::<K, V>(key);
    if result.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(key, LEDGER_THRESHOLD_PROPOSAL, LEDGER_BUMP_PROPOSAL);
    }
    result
}

/// Store an entry in persistent storage and bump it
fn set_persistent<K: IntoVal<Env, Val>, V: IntoVal<Env, Val>>(e: &Env, key: &K, value: &V) {
    e.storage().persistent().set::<K, V>(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, LEDGER_THRESHOLD_PROPOSAL, LEDGER_BUMP_PROPOSAL);
}

/********** Instance **********/

/// Check if the contract has been initialized
pub fn get_is_init(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, IS_INIT_KEY))
}

/// Set the contract as initialized
pub fn set_is_init(e: &Env) {
    e.storage()
        .instance()
        .set::<Symbol, bool>(&Symbol::new(e, IS_INIT_KEY), &true);
}

/// Set the votes contract address
///
/// ### Arguments
/// * `votes` - The address of votes contract
pub fn set_votes_address(e: &Env, votes: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, VOTES_ADDRESS_KEY), votes);
}

/// Get the votes contract address
pub fn get_votes_address(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, VOTES_ADDRESS_KEY))
        .unwrap_optimized()
}

/// Set the admin address
///
/// ### Arguments
/// * `admin` - The address allowed to change settings
pub fn set_admin(e: &Env, admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), admin);
}

/// Get the admin address
pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

/// Set the address allowed to create proposals snapshotted at the current ledger
///
/// ### Arguments
/// * `minter` - The snapshot minter address
pub fn set_snapshot_minter(e: &Env, minter: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, SNAPSHOT_MINTER_KEY), minter);
}

/// Get the snapshot minter address, if one is set
pub fn get_snapshot_minter(e: &Env) -> Option<Address> {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, SNAPSHOT_MINTER_KEY))
}

/// Set the contract settings and bump the settings version
///
/// ### Arguments
/// * `settings` - The contract settings
pub fn set_settings(e: &Env, settings: &VotingSettings) {
    e.storage()
        .instance()
        .set::<Symbol, VotingSettings>(&Symbol::new(e, SETTINGS_KEY), settings);
    let version = get_settings_version(e) + 1;
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, SETTINGS_VERSION_KEY), &version);
}

/// Get the contract settings
pub fn get_settings(e: &Env) -> VotingSettings {
    e.storage()
        .instance()
        .get::<Symbol, VotingSettings>(&Symbol::new(e, SETTINGS_KEY))
        .unwrap_optimized()
}

/// Get the version of the contract settings. Starts at 1 once initialized.
pub fn get_settings_version(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, SETTINGS_VERSION_KEY))
        .unwrap_or(0)
}

/********** Persistent **********/

/// Set the next proposal id
///
/// ### Arguments
/// * `proposal_id` - The new proposal_id
pub fn set_next_proposal_id(e: &Env, proposal_id: u32) {
    let key = Symbol::new(e, PROPOSAL_ID_KEY);
    set_persistent::<Symbol, u32>(e, &key, &proposal_id);
}

/// Get the next proposal id
pub fn get_next_proposal_id(e: &Env) -> u32 {
    let key = Symbol::new(e, PROPOSAL_ID_KEY);
    get_persistent_default::<Symbol, u32>(
        e,
        &key,
        0_u32,
        LEDGER_THRESHOLD_PROPOSAL,
        LEDGER_BUMP_PROPOSAL,
    )
}

/// Fetch proposal config at `proposal_id`
///
/// ### Arguments
/// * `proposal_id` - The id of the proposal to fetch
pub fn get_proposal_config(e: &Env, proposal_id: u32) -> Option<ProposalConfig> {
    get_persistent::<VotingDataKey, ProposalConfig>(e, &VotingDataKey::Config(proposal_id))
}

/// Store proposal config at `proposal_id`
///
/// ### Arguments
/// * `proposal_id` - The proposal id
/// * `config` - The proposal config to store
pub fn set_proposal_config(e: &Env, proposal_id: u32, config: &ProposalConfig) {
    set_persistent::<VotingDataKey, ProposalConfig>(e, &VotingDataKey::Config(proposal_id), config);
}

/// Fetch proposal data at `proposal_id`
///
/// ### Arguments
/// * `proposal_id` - The id of the proposal to fetch
pub fn get_proposal_data(e: &Env, proposal_id: u32) -> Option<ProposalData> {
    get_persistent::<VotingDataKey, ProposalData>(e, &VotingDataKey::Data(proposal_id))
}

/// Store proposal data at `proposal_id`
///
/// ### Arguments
/// * `proposal_id` - The proposal id
/// * `data` - The proposal data to store
pub fn set_proposal_data(e: &Env, proposal_id: u32, data: &ProposalData) {
    set_persistent::<VotingDataKey, ProposalData>(e, &VotingDataKey::Data(proposal_id), data);
}

/********** Vote **********/

/// Set the ballot of `voter` for proposal at `proposal_id`
///
/// ### Arguments
/// * `voter` - The address of the voter
/// * `proposal_id` - The proposal id
/// * `ballot` - The vote and voting power the voter cast
pub fn set_ballot(e: &Env, voter: &Address, proposal_id: u32, ballot: &Ballot) {
    let key = VotingDataKey::VoterStatus(VoterStatusKey {
        voter: voter.clone(),
        proposal_id,
    });
    set_persistent::<VotingDataKey, Ballot>(e, &key, ballot);
}

/// Get the ballot of `voter` for proposal at `proposal_id`. Defaults to an absent ballot.
///
/// ### Arguments
/// * `voter` - The address of the voter
/// * `proposal_id` - The proposal id
pub fn get_ballot(e: &Env, voter: &Address, proposal_id: u32) -> Ballot {
    let key = VotingDataKey::VoterStatus(VoterStatusKey {
        voter: voter.clone(),
        proposal_id,
    });
    get_persistent_default::<VotingDataKey, Ballot>(
        e,
        &key,
        Ballot {
            state: VoterState::Absent,
            power: 0,
        },
        LEDGER_THRESHOLD_PROPOSAL,
        LEDGER_BUMP_PROPOSAL,
    )
}

/// Set the vote count of proposal at `proposal_id`
///
/// ### Arguments
/// * `proposal_id` - The proposal id
/// * `count` - The vote count to store
pub fn set_proposal_vote_count(e: &Env, proposal_id: u32, count: &VoteCount) {
    set_persistent::<VotingDataKey, VoteCount>(e, &VotingDataKey::ProposalVotes(proposal_id), count);
}

/// Get the vote count of proposal at `proposal_id`
///
/// ### Arguments
/// * `proposal_id` - The proposal id
pub fn get_proposal_vote_count(e: &Env, proposal_id: u32) -> VoteCount {
    get_persistent_default::<VotingDataKey, VoteCount>(
        e,
        &VotingDataKey::ProposalVotes(proposal_id),
        VoteCount::new(),
        LEDGER_THRESHOLD_PROPOSAL,
        LEDGER_BUMP_PROPOSAL,
    )
}
