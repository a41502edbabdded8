use soroban_sdk::{
    contract, contractimpl, panic_with_error, unwrap::UnwrapOptimized, Address, Env, String, Vec,
};

use crate::{
    dependencies::VotesClient,
    errors::VotingError,
    events::VotingEvents,
    executor,
    settings::{require_valid_duration, require_valid_settings, require_valid_thresholds},
    storage,
    types::{
        Ballot, Calldata, Proposal, ProposalConfig, ProposalData, ProposalStatus, VoteCount,
        VoterState, VotingSettings,
    },
    voting::Voting,
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl Voting for VotingContract {
    fn initialize(e: Env, admin: Address, votes: Address, settings: VotingSettings) {
        if storage::get_is_init(&e) {
            panic_with_error!(&e, VotingError::AlreadyInitializedError);
        }
        require_valid_settings(&e, &settings);

        storage::set_admin(&e, &admin);
        storage::set_votes_address(&e, &votes);
        storage::set_settings(&e, &settings);
        storage::set_is_init(&e);
        storage::extend_instance(&e);
    }

    fn settings(e: Env) -> VotingSettings {
        storage::get_settings(&e)
    }

    fn settings_version(e: Env) -> u32 {
        storage::get_settings_version(&e)
    }

    fn admin(e: Env) -> Address {
        storage::get_admin(&e)
    }

    fn set_admin(e: Env, new_admin: Address) {
        let admin = storage::get_admin(&e);
        admin.require_auth();
        storage::extend_instance(&e);

        storage::set_admin(&e, &new_admin);

        VotingEvents::admin_changed(&e, admin, new_admin);
    }

    fn set_support_required_pct(e: Env, support_required_pct: u64) {
        storage::get_admin(&e).require_auth();
        storage::extend_instance(&e);

        let mut settings = storage::get_settings(&e);
        require_valid_thresholds(&e, support_required_pct, settings.min_quorum_pct);
        settings.support_required_pct = support_required_pct;
        storage::set_settings(&e, &settings);

        VotingEvents::support_required_changed(&e, support_required_pct);
    }

    fn set_min_quorum_pct(e: Env, min_quorum_pct: u64) {
        storage::get_admin(&e).require_auth();
        storage::extend_instance(&e);

        let mut settings = storage::get_settings(&e);
        require_valid_thresholds(&e, settings.support_required_pct, min_quorum_pct);
        settings.min_quorum_pct = min_quorum_pct;
        storage::set_settings(&e, &settings);

        VotingEvents::min_quorum_changed(&e, min_quorum_pct);
    }

    fn set_voting_duration(e: Env, voting_duration: u64) {
        storage::get_admin(&e).require_auth();
        storage::extend_instance(&e);

        require_valid_duration(&e, voting_duration);
        let mut settings = storage::get_settings(&e);
        settings.voting_duration = voting_duration;
        storage::set_settings(&e, &settings);

        VotingEvents::voting_duration_changed(&e, voting_duration);
    }

    fn set_early_execution_allowed(e: Env, allowed: bool) {
        storage::get_admin(&e).require_auth();
        storage::extend_instance(&e);

        let mut settings = storage::get_settings(&e);
        if settings.early_execution == allowed {
            panic_with_error!(&e, VotingError::NoOpChangeError);
        }
        settings.early_execution = allowed;
        storage::set_settings(&e, &settings);

        VotingEvents::early_execution_changed(&e, allowed);
    }

    fn set_snapshot_minter(e: Env, minter: Address) {
        storage::get_admin(&e).require_auth();
        storage::extend_instance(&e);

        storage::set_snapshot_minter(&e, &minter);

        VotingEvents::snapshot_minter_changed(&e, minter);
    }

    fn snapshot_minter(e: Env) -> Option<Address> {
        storage::get_snapshot_minter(&e)
    }

    fn create_proposal(
        e: Env,
        creator: Address,
        metadata: String,
        action: Vec<Calldata>,
        cast_vote: bool,
        execute_if_decided: bool,
    ) -> u32 {
        creator.require_auth();
        storage::extend_instance(&e);

        // the current ledger is still open, so use the last closed ledger
        let snapshot = match e.ledger().sequence().checked_sub(1) {
            Some(snapshot) => snapshot,
            None => panic_with_error!(&e, VotingError::InternalError),
        };
        let total_power =
            VotesClient::new(&e, &storage::get_votes_address(&e)).get_past_total_supply(&snapshot);
        new_proposal(
            &e,
            &creator,
            metadata,
            action,
            snapshot,
            total_power,
            cast_vote,
            execute_if_decided,
        )
    }

    fn create_proposal_same_ledger(
        e: Env,
        minter: Address,
        creator: Address,
        metadata: String,
        action: Vec<Calldata>,
        cast_vote: bool,
        execute_if_decided: bool,
    ) -> u32 {
        if storage::get_snapshot_minter(&e) != Some(minter.clone()) {
            panic_with_error!(&e, VotingError::UnauthorizedError);
        }
        minter.require_auth();
        if creator != minter {
            creator.require_auth();
        }
        storage::extend_instance(&e);

        let snapshot = e.ledger().sequence();
        let total_power = VotesClient::new(&e, &storage::get_votes_address(&e)).total_supply();
        new_proposal(
            &e,
            &creator,
            metadata,
            action,
            snapshot,
            total_power,
            cast_vote,
            execute_if_decided,
        )
    }

    fn vote(e: Env, voter: Address, proposal_id: u32, support: bool, execute_if_decided: bool) {
        voter.require_auth();
        storage::extend_instance(&e);

        let proposal = load_proposal(&e, proposal_id);
        store_settled_snapshot(&e, proposal_id, &proposal);
        let LoadedProposal { data, votes, .. } = proposal;
        if !is_open(&e, &data) {
            panic_with_error!(&e, VotingError::VotingClosedError);
        }
        // only the creator's inline vote can use power from an open ledger
        if data.live_snapshot {
            panic_with_error!(&e, VotingError::SnapshotOpenError);
        }
        let power = voting_power_at(&e, &data, &voter);
        if power <= 0 {
            panic_with_error!(&e, VotingError::NoVotingPowerError);
        }
        cast_vote(
            &e,
            &voter,
            proposal_id,
            data,
            votes,
            power,
            support,
            execute_if_decided,
        );
    }

    fn can_vote(e: Env, proposal_id: u32, voter: Address) -> bool {
        let LoadedProposal { data, .. } = load_proposal(&e, proposal_id);
        is_open(&e, &data) && !data.live_snapshot && voting_power_at(&e, &data, &voter) > 0
    }

    fn can_execute(e: Env, proposal_id: u32) -> bool {
        let LoadedProposal { data, votes, .. } = load_proposal(&e, proposal_id);
        can_execute_proposal(&e, &data, &votes)
    }

    fn execute_vote(e: Env, proposal_id: u32) {
        storage::extend_instance(&e);

        let proposal = load_proposal(&e, proposal_id);
        store_settled_snapshot(&e, proposal_id, &proposal);
        let LoadedProposal { data, votes, .. } = proposal;
        if !can_execute_proposal(&e, &data, &votes) {
            panic_with_error!(&e, VotingError::CannotExecuteError);
        }
        execute_proposal(&e, proposal_id, data);
    }

    fn get_vote(e: Env, proposal_id: u32) -> Proposal {
        let LoadedProposal { data, votes, .. } = load_proposal(&e, proposal_id);
        let config = storage::get_proposal_config(&e, proposal_id).unwrap_optimized();
        Proposal {
            id: proposal_id,
            config,
            data,
            votes,
        }
    }

    fn get_voter_state(e: Env, proposal_id: u32, voter: Address) -> VoterState {
        let proposal = load_proposal(&e, proposal_id);
        match proposal.settled_creator_ballot {
            Some(ballot) if voter == proposal.data.creator => ballot.state,
            _ => storage::get_ballot(&e, &voter, proposal_id).state,
        }
    }

    fn get_status(e: Env, proposal_id: u32) -> ProposalStatus {
        let LoadedProposal { data, votes, .. } = load_proposal(&e, proposal_id);
        if data.executed {
            ProposalStatus::Executed
        } else if is_decided(&e, &data, &votes) {
            ProposalStatus::Decided
        } else if e.ledger().timestamp() >= data.vote_end() {
            ProposalStatus::Expired
        } else {
            ProposalStatus::Active
        }
    }

    fn proposal_count(e: Env) -> u32 {
        storage::get_next_proposal_id(&e)
    }
}

/// Store a new proposal and optionally cast the creator's vote on it
#[allow(clippy::too_many_arguments)]
fn new_proposal(
    e: &Env,
    creator: &Address,
    metadata: String,
    action: Vec<Calldata>,
    snapshot: u32,
    total_power: i128,
    cast_vote_for_creator: bool,
    execute_if_decided: bool,
) -> u32 {
    if total_power <= 0 {
        panic_with_error!(e, VotingError::NoVotingPowerError);
    }

    let settings = storage::get_settings(e);
    let proposal_id = storage::get_next_proposal_id(e);
    let data = ProposalData {
        creator: creator.clone(),
        start_time: e.ledger().timestamp(),
        voting_duration: settings.voting_duration,
        snapshot,
        support_required_pct: settings.support_required_pct,
        min_quorum_pct: settings.min_quorum_pct,
        settings_version: storage::get_settings_version(e),
        total_power,
        live_snapshot: snapshot >= e.ledger().sequence(),
        executed: false,
    };
    storage::set_proposal_config(
        e,
        proposal_id,
        &ProposalConfig {
            metadata: metadata.clone(),
            action,
        },
    );
    storage::set_proposal_data(e, proposal_id, &data);
    storage::set_next_proposal_id(e, proposal_id + 1);

    VotingEvents::proposal_created(e, proposal_id, creator.clone(), metadata);

    if cast_vote_for_creator {
        let power = voting_power_at(e, &data, creator);
        if power > 0 {
            cast_vote(
                e,
                creator,
                proposal_id,
                data,
                VoteCount::new(),
                power,
                true,
                execute_if_decided,
            );
        }
    }
    proposal_id
}

/// Replace the voter's previous ballot with a new one and execute the proposal if requested
#[allow(clippy::too_many_arguments)]
fn cast_vote(
    e: &Env,
    voter: &Address,
    proposal_id: u32,
    data: ProposalData,
    mut votes: VoteCount,
    power: i128,
    support: bool,
    execute_if_decided: bool,
) {
    votes.remove_ballot(&storage::get_ballot(e, voter, proposal_id));
    let ballot = Ballot {
        state: if support {
            VoterState::Yea
        } else {
            VoterState::Nay
        },
        power,
    };
    votes.add_ballot(&ballot);
    if votes.total() > data.total_power {
        panic_with_error!(e, VotingError::InternalError);
    }
    storage::set_proposal_vote_count(e, proposal_id, &votes);
    storage::set_ballot(e, voter, proposal_id, &ballot);

    VotingEvents::vote_cast(e, proposal_id, voter.clone(), support, power);

    if execute_if_decided && can_execute_proposal(e, &data, &votes) {
        execute_proposal(e, proposal_id, data);
    }
}

/// Mark the proposal as executed and run its action
fn execute_proposal(e: &Env, proposal_id: u32, mut data: ProposalData) {
    data.executed = true;
    storage::set_proposal_data(e, proposal_id, &data);

    let config = storage::get_proposal_config(e, proposal_id).unwrap_optimized();
    executor::run_script(e, &config.action);

    VotingEvents::proposal_executed(e, proposal_id);
}

fn get_proposal_data_or_panic(e: &Env, proposal_id: u32) -> ProposalData {
    match storage::get_proposal_data(e, proposal_id) {
        Some(data) => data,
        None => panic_with_error!(e, VotingError::ProposalNotFoundError),
    }
}

/// A proposal's data and tally as of the current ledger
struct LoadedProposal {
    data: ProposalData,
    votes: VoteCount,
    /// The creator's ballot re-read from the closed snapshot, if the snapshot was settled
    settled_creator_ballot: Option<Ballot>,
}

/// Load a proposal. A snapshot taken from a ledger that has since closed is settled: the total
/// voting power and the creator's ballot are re-read at the closed snapshot, so every ballot and
/// the total come from the same ledger state.
///
/// ### Panics
/// * If the proposal does not exist
fn load_proposal(e: &Env, proposal_id: u32) -> LoadedProposal {
    let mut data = get_proposal_data_or_panic(e, proposal_id);
    let mut votes = storage::get_proposal_vote_count(e, proposal_id);
    if !data.live_snapshot || data.snapshot >= e.ledger().sequence() {
        return LoadedProposal {
            data,
            votes,
            settled_creator_ballot: None,
        };
    }

    let votes_client = VotesClient::new(e, &storage::get_votes_address(e));
    data.total_power = votes_client.get_past_total_supply(&data.snapshot);
    data.live_snapshot = false;

    let mut ballot = storage::get_ballot(e, &data.creator, proposal_id);
    if ballot.state != VoterState::Absent {
        votes.remove_ballot(&ballot);
        ballot.power = votes_client.get_past_votes(&data.creator, &data.snapshot);
        if ballot.power <= 0 {
            ballot = Ballot {
                state: VoterState::Absent,
                power: 0,
            };
        }
        votes.add_ballot(&ballot);
    }
    LoadedProposal {
        data,
        votes,
        settled_creator_ballot: Some(ballot),
    }
}

/// Persist a settled snapshot from `load_proposal`. Does nothing if nothing was settled.
fn store_settled_snapshot(e: &Env, proposal_id: u32, proposal: &LoadedProposal) {
    if let Some(ballot) = &proposal.settled_creator_ballot {
        storage::set_proposal_data(e, proposal_id, &proposal.data);
        storage::set_proposal_vote_count(e, proposal_id, &proposal.votes);
        storage::set_ballot(e, &proposal.data.creator, proposal_id, ballot);
    }
}

/// The voting power of `voter` at the proposal snapshot
fn voting_power_at(e: &Env, data: &ProposalData, voter: &Address) -> i128 {
    let votes_client = VotesClient::new(e, &storage::get_votes_address(e));
    if data.live_snapshot {
        // the snapshot ledger is still open
        votes_client.get_votes(voter)
    } else {
        votes_client.get_past_votes(voter, &data.snapshot)
    }
}

/// A proposal accepts votes until it is executed or its voting window closes
fn is_open(e: &Env, data: &ProposalData) -> bool {
    !data.executed && e.ledger().timestamp() < data.vote_end()
}

/// A proposal is decided once both the support and quorum thresholds are exceeded
fn is_decided(e: &Env, data: &ProposalData, votes: &VoteCount) -> bool {
    votes.is_over_support(e, data.support_required_pct)
        && votes.is_over_quorum(e, data.min_quorum_pct, data.total_power)
}

fn can_execute_proposal(e: &Env, data: &ProposalData, votes: &VoteCount) -> bool {
    if data.executed || !is_decided(e, data, votes) {
        return false;
    }
    if e.ledger().timestamp() < data.vote_end() {
        return storage::get_settings(e).early_execution;
    }
    true
}
