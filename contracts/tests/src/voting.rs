use soroban_sdk::{vec, Address, Env, IntoVal, String, Symbol, Vec};
use soroban_voting::{
    constants::PCT_BASE,
    types::{Calldata, VotingSettings},
    VotingContract, VotingContractClient,
};

use crate::{votes, ONE_DAY_SECONDS};

pub const PCT_50: u64 = PCT_BASE / 2;
pub const PCT_20: u64 = PCT_BASE / 5;

/// Create a voting contract backed by a mock votes contract
///
/// Returns (voting, votes)
///
/// ### Arguments
/// * `admin` - The address of the admin
/// * `settings` - The settings for the voting contract
pub fn create_voting<'a>(e: &Env, admin: &Address, settings: &VotingSettings) -> (Address, Address) {
    let voting_address = e.register_contract(None, VotingContract {});
    let (votes_address, _) = votes::create_mock_votes(e);
    let voting_client: VotingContractClient<'a> = VotingContractClient::new(e, &voting_address);
    voting_client.initialize(admin, &votes_address, settings);
    (voting_address, votes_address)
}

/// Default voting settings
pub fn default_voting_settings() -> VotingSettings {
    VotingSettings {
        support_required_pct: PCT_50, // 50%
        min_quorum_pct: PCT_20,       // 20%
        voting_duration: ONE_DAY_SECONDS * 7,
        early_execution: true,
    }
}

/// Default test proposal information
pub fn default_proposal_data(e: &Env) -> (String, Vec<Calldata>) {
    let metadata = String::from_str(e, "# This is a cool proposal");
    (metadata, vec![e])
}

/// An action script that transfers `amount` of `token` from the voting contract to `to`
pub fn transfer_action(
    e: &Env,
    token: &Address,
    voting: &Address,
    to: &Address,
    amount: i128,
) -> Vec<Calldata> {
    vec![
        e,
        Calldata {
            contract_id: token.clone(),
            function: Symbol::new(e, "transfer"),
            args: (voting.clone(), to.clone(), amount).into_val(e),
            auths: vec![e],
        },
    ]
}
