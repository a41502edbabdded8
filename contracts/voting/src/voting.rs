use soroban_sdk::{contractclient, Address, Env, String, Vec};

use crate::types::{Calldata, Proposal, ProposalStatus, VoterState, VotingSettings};

#[contractclient(name = "VotingClient")]
pub trait Voting {
    /// Setup the voting contract
    ///
    /// ### Arguments
    /// * `admin` - The address allowed to change settings
    /// * `votes` - The address of the contract used to track voting power
    /// * `settings` - The settings used for new proposals
    ///
    /// ### Panics
    /// * If the contract is already initialized
    /// * If the settings are invalid
    fn initialize(e: Env, admin: Address, votes: Address, settings: VotingSettings);

    /// Get the current settings
    fn settings(e: Env) -> VotingSettings;

    /// Get the version of the current settings. Each settings change increments the version.
    fn settings_version(e: Env) -> u32;

    /// Get the admin address
    fn admin(e: Env) -> Address;

    /// (Admin only) Set a new admin
    ///
    /// ### Arguments
    /// * `new_admin` - The address of the new admin
    fn set_admin(e: Env, new_admin: Address);

    /// (Admin only) Set the support required for new proposals
    ///
    /// ### Arguments
    /// * `support_required_pct` - The new support required, with `PCT_BASE` as 100%
    ///
    /// ### Panics
    /// * If the value is 100% or more, or less than the minimum quorum
    fn set_support_required_pct(e: Env, support_required_pct: u64);

    /// (Admin only) Set the minimum quorum for new proposals
    ///
    /// ### Arguments
    /// * `min_quorum_pct` - The new minimum quorum, with `PCT_BASE` as 100%
    ///
    /// ### Panics
    /// * If the value is greater than the support required
    fn set_min_quorum_pct(e: Env, min_quorum_pct: u64);

    /// (Admin only) Set the voting duration for new proposals
    ///
    /// ### Arguments
    /// * `voting_duration` - The new voting duration in seconds
    ///
    /// ### Panics
    /// * If the value is zero or greater than the maximum voting duration
    fn set_voting_duration(e: Env, voting_duration: u64);

    /// (Admin only) Enable or disable executing decided proposals before their voting window closes.
    /// Applies to all open proposals.
    ///
    /// ### Arguments
    /// * `allowed` - If early execution is allowed
    ///
    /// ### Panics
    /// * If the value is unchanged
    fn set_early_execution_allowed(e: Env, allowed: bool);

    /// (Admin only) Set the address allowed to create proposals snapshotted at the current ledger
    ///
    /// ### Arguments
    /// * `minter` - The address of the snapshot minter
    fn set_snapshot_minter(e: Env, minter: Address);

    /// Get the snapshot minter, if one is set
    fn snapshot_minter(e: Env) -> Option<Address>;

    /// Create a new proposal with voting power snapshotted at the last closed ledger
    ///
    /// Returns the id of the new proposal
    ///
    /// ### Arguments
    /// * `creator` - The address of the account creating the proposal
    /// * `metadata` - The description of the proposal
    /// * `action` - The calls the proposal will make if executed
    /// * `cast_vote` - Cast a "yea" vote for the creator, if they have voting power
    /// * `execute_if_decided` - Execute the proposal if the creator's vote decides it
    ///
    /// ### Panics
    /// * If there is no voting power at the snapshot
    fn create_proposal(
        e: Env,
        creator: Address,
        metadata: String,
        action: Vec<Calldata>,
        cast_vote: bool,
        execute_if_decided: bool,
    ) -> u32;

    /// (Snapshot minter only) Create a new proposal with voting power snapshotted at the current
    /// ledger. This allows voting power created earlier in the same ledger to vote on the proposal.
    ///
    /// Only the creator's vote is cast while the ledger is open. Once it closes, the total voting
    /// power and the creator's vote are re-read at the snapshot, and other accounts can vote.
    ///
    /// Returns the id of the new proposal
    ///
    /// ### Arguments
    /// * `minter` - The address of the snapshot minter
    /// * `creator` - The address of the account creating the proposal
    /// * `metadata` - The description of the proposal
    /// * `action` - The calls the proposal will make if executed
    /// * `cast_vote` - Cast a "yea" vote for the creator, if they have voting power
    /// * `execute_if_decided` - Execute the proposal if the creator's vote decides it
    ///
    /// ### Panics
    /// * If `minter` is not the snapshot minter
    /// * If there is no voting power at the snapshot
    fn create_proposal_same_ledger(
        e: Env,
        minter: Address,
        creator: Address,
        metadata: String,
        action: Vec<Calldata>,
        cast_vote: bool,
        execute_if_decided: bool,
    ) -> u32;

    /// Vote on a proposal with the voter's voting power at the proposal's snapshot. Voting again
    /// replaces the voter's previous vote.
    ///
    /// ### Arguments
    /// * `voter` - The address of the account voting
    /// * `proposal_id` - The id of the proposal to vote on
    /// * `support` - True to vote "yea", false to vote "nay"
    /// * `execute_if_decided` - Execute the proposal if it can be executed after the vote
    ///
    /// ### Panics
    /// * If the proposal does not exist
    /// * If the proposal is executed or the voting window has closed
    /// * If the proposal's snapshot ledger has not closed
    /// * If the voter has no voting power at the snapshot
    fn vote(e: Env, voter: Address, proposal_id: u32, support: bool, execute_if_decided: bool);

    /// Check if a voter can vote on a proposal
    ///
    /// ### Arguments
    /// * `proposal_id` - The id of the proposal
    /// * `voter` - The address of the account voting
    ///
    /// ### Panics
    /// * If the proposal does not exist
    fn can_vote(e: Env, proposal_id: u32, voter: Address) -> bool;

    /// Check if a proposal can be executed
    ///
    /// ### Arguments
    /// * `proposal_id` - The id of the proposal
    ///
    /// ### Panics
    /// * If the proposal does not exist
    fn can_execute(e: Env, proposal_id: u32) -> bool;

    /// Execute a proposal's action
    ///
    /// ### Arguments
    /// * `proposal_id` - The id of the proposal to execute
    ///
    /// ### Panics
    /// * If the proposal does not exist
    /// * If the proposal cannot be executed
    /// * If any call in the proposal's action fails
    fn execute_vote(e: Env, proposal_id: u32);

    /// Get a proposal by its id
    ///
    /// ### Arguments
    /// * `proposal_id` - The id of the proposal
    ///
    /// ### Panics
    /// * If the proposal does not exist
    fn get_vote(e: Env, proposal_id: u32) -> Proposal;

    /// Get the vote a voter has recorded on a proposal
    ///
    /// ### Arguments
    /// * `proposal_id` - The id of the proposal
    /// * `voter` - The address of the voter
    ///
    /// ### Panics
    /// * If the proposal does not exist
    fn get_voter_state(e: Env, proposal_id: u32, voter: Address) -> VoterState;

    /// Get the status of a proposal
    ///
    /// ### Arguments
    /// * `proposal_id` - The id of the proposal
    ///
    /// ### Panics
    /// * If the proposal does not exist
    fn get_status(e: Env, proposal_id: u32) -> ProposalStatus;

    /// Get the number of proposals created
    fn proposal_count(e: Env) -> u32;
}
