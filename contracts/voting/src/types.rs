use soroban_sdk::{contracttype, Address, String, Symbol, Val, Vec};

/// The voting settings used for new proposals
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct VotingSettings {
    /// The percentage of cast votes (expressed with `PCT_BASE` as 100%) that must be "yea" for a
    /// proposal to be decided. Measured against yea + nay.
    pub support_required_pct: u64,
    /// The percentage of the total voting power at the snapshot (expressed with `PCT_BASE` as 100%)
    /// that must be "yea" for a proposal to be decided.
    pub min_quorum_pct: u64,
    /// The time (in seconds) a proposal is open to votes.
    pub voting_duration: u64,
    /// Whether a decided proposal can be executed before its voting window closes. Unlike the
    /// thresholds, this is read live when checking if a proposal can be executed.
    pub early_execution: bool,
}

/// Object for storing call data
#[derive(Clone)]
#[contracttype]
pub struct Calldata {
    pub contract_id: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
    pub auths: Vec<Calldata>,
}

/// The proposal object
#[derive(Clone)]
#[contracttype]
pub struct Proposal {
    pub id: u32,
    pub config: ProposalConfig,
    pub data: ProposalData,
    pub votes: VoteCount,
}

/// The immutable content of a proposal. Set by the proposal creator.
#[derive(Clone)]
#[contracttype]
pub struct ProposalConfig {
    pub metadata: String,
    pub action: Vec<Calldata>,
}

/// The data for a proposal. Everything but `executed` is frozen once the snapshot is closed.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct ProposalData {
    pub creator: Address,
    pub start_time: u64,
    pub voting_duration: u64,
    /// The ledger sequence used to look up all voting power for the proposal
    pub snapshot: u32,
    pub support_required_pct: u64,
    pub min_quorum_pct: u64,
    /// The version of the settings the thresholds were copied from
    pub settings_version: u32,
    /// The total voting power at `snapshot`
    pub total_power: i128,
    /// Set while `total_power` and the creator's ballot come from an open ledger. Cleared once
    /// they are re-read from the closed `snapshot`.
    pub live_snapshot: bool,
    pub executed: bool,
}

impl ProposalData {
    /// The timestamp at which voting closes
    pub fn vote_end(&self) -> u64 {
        self.start_time + self.voting_duration
    }
}

// Stores proposal results
#[derive(Clone, Debug, Default, PartialEq)]
#[contracttype]
pub struct VoteCount {
    pub yea: i128,
    pub nay: i128,
}

/// The vote a voter currently has recorded on a proposal
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
#[contracttype]
pub enum VoterState {
    Absent = 0,
    Yea = 1,
    Nay = 2,
}

/// A voter's latest vote and the voting power it contributed
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Ballot {
    pub state: VoterState,
    pub power: i128,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
#[contracttype]
pub enum ProposalStatus {
    /// The proposal can be voted on and has not met both thresholds
    Active = 0,
    /// The proposal has met both the support and quorum thresholds and has not been executed
    Decided = 1,
    /// The proposal has been executed
    Executed = 2,
    /// The voting window closed without the proposal being decided
    Expired = 3,
}
