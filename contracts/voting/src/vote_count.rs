use soroban_sdk::Env;

use crate::{
    threshold::passes_threshold,
    types::{Ballot, VoteCount, VoterState},
};

/// Implement VoteCount functions for yea / nay tallies
impl VoteCount {
    /// Create a new VoteCount where all vote types have 0 votes
    pub fn new() -> Self {
        Self { yea: 0, nay: 0 }
    }

    /// The number of votes cast
    pub fn total(&self) -> i128 {
        self.yea + self.nay
    }

    /// Add a ballot to the VoteCount. An absent ballot adds nothing.
    pub fn add_ballot(&mut self, ballot: &Ballot) {
        match ballot.state {
            VoterState::Yea => self.yea += ballot.power,
            VoterState::Nay => self.nay += ballot.power,
            VoterState::Absent => {}
        }
    }

    /// Remove a previously added ballot from the VoteCount. An absent ballot removes nothing.
    pub fn remove_ballot(&mut self, ballot: &Ballot) {
        match ballot.state {
            VoterState::Yea => self.yea -= ballot.power,
            VoterState::Nay => self.nay -= ballot.power,
            VoterState::Absent => {}
        }
    }

    /// Check if the "yea" share of cast votes is over the support threshold
    ///
    /// ### Arguments
    /// * `support_required_pct` - The support percentage to exceed
    pub fn is_over_support(&self, e: &Env, support_required_pct: u64) -> bool {
        passes_threshold(e, self.yea, self.total(), support_required_pct)
    }

    /// Check if the "yea" share of the total voting power is over the quorum
    ///
    /// ### Arguments
    /// * `min_quorum_pct` - The quorum percentage to exceed
    /// * `total_power` - The total voting power at the proposal snapshot
    pub fn is_over_quorum(&self, e: &Env, min_quorum_pct: u64, total_power: i128) -> bool {
        passes_threshold(e, self.yea, total_power, min_quorum_pct)
    }
}
