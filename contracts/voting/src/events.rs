use soroban_sdk::{Address, Env, String, Symbol};

pub struct VotingEvents {}

impl VotingEvents {
    /// Emitted when a proposal is created
    ///
    /// Note: The size limit for an event is 2kB. Metadata must be within the limit
    /// to create the proposal.
    ///
    /// - topics - `["proposal_created", proposal_id: u32, creator: Address]`
    /// - data - `[metadata: String]`
    pub fn proposal_created(e: &Env, proposal_id: u32, creator: Address, metadata: String) {
        let topics = (Symbol::new(e, "proposal_created"), proposal_id, creator);
        e.events().publish(topics, metadata);
    }

    /// Emitted when a vote is cast
    ///
    /// - topics - `["vote_cast", proposal_id: u32, voter: Address]`
    /// - data - `[support: bool, amount: i128]`
    pub fn vote_cast(e: &Env, proposal_id: u32, voter: Address, support: bool, amount: i128) {
        let topics = (Symbol::new(e, "vote_cast"), proposal_id, voter);
        e.events().publish(topics, (support, amount));
    }

    /// Emitted when a proposal is executed
    ///
    /// - topics - `["proposal_executed", proposal_id: u32]`
    /// - data - `[]`
    pub fn proposal_executed(e: &Env, proposal_id: u32) {
        let topics = (Symbol::new(e, "proposal_executed"), proposal_id);
        e.events().publish(topics, ());
    }

    /// Emitted when the support required is changed
    ///
    /// - topics - `["support_required_changed"]`
    /// - data - `support_required_pct: u64`
    pub fn support_required_changed(e: &Env, support_required_pct: u64) {
        let topics = (Symbol::new(e, "support_required_changed"),);
        e.events().publish(topics, support_required_pct);
    }

    /// Emitted when the minimum quorum is changed
    ///
    /// - topics - `["min_quorum_changed"]`
    /// - data - `min_quorum_pct: u64`
    pub fn min_quorum_changed(e: &Env, min_quorum_pct: u64) {
        let topics = (Symbol::new(e, "min_quorum_changed"),);
        e.events().publish(topics, min_quorum_pct);
    }

    /// Emitted when the voting duration is changed
    ///
    /// - topics - `["voting_duration_changed"]`
    /// - data - `voting_duration: u64`
    pub fn voting_duration_changed(e: &Env, voting_duration: u64) {
        let topics = (Symbol::new(e, "voting_duration_changed"),);
        e.events().publish(topics, voting_duration);
    }

    /// Emitted when early execution is enabled or disabled
    ///
    /// - topics - `["early_execution_changed"]`
    /// - data - `early_execution: bool`
    pub fn early_execution_changed(e: &Env, early_execution: bool) {
        let topics = (Symbol::new(e, "early_execution_changed"),);
        e.events().publish(topics, early_execution);
    }

    /// Emitted when the admin is changed
    ///
    /// - topics - `["admin_changed", old_admin: Address]`
    /// - data - `new_admin: Address`
    pub fn admin_changed(e: &Env, old_admin: Address, new_admin: Address) {
        let topics = (Symbol::new(e, "admin_changed"), old_admin);
        e.events().publish(topics, new_admin);
    }

    /// Emitted when the snapshot minter is changed
    ///
    /// - topics - `["snapshot_minter_changed"]`
    /// - data - `minter: Address`
    pub fn snapshot_minter_changed(e: &Env, minter: Address) {
        let topics = (Symbol::new(e, "snapshot_minter_changed"),);
        e.events().publish(topics, minter);
    }
}
