use mock_votes::{MockTokenVotes, MockTokenVotesClient};
use soroban_sdk::{Address, Env};

use crate::env::EnvTestUtils;

/// Create a votes contract that tracks voting power by ledger sequence
pub fn create_mock_votes<'a>(e: &Env) -> (Address, MockTokenVotesClient<'a>) {
    let votes_id = e.register_contract(None, MockTokenVotes {});
    let votes_client = MockTokenVotesClient::new(e, &votes_id);
    (votes_id, votes_client)
}

/// Set the voting power of each account, then close the ledger so the
/// power is visible to proposals created afterwards
///
/// ### Arguments
/// * `holders` - The accounts and their voting power
pub fn distribute_votes(e: &Env, votes_client: &MockTokenVotesClient, holders: &[(&Address, i128)]) {
    for (account, amount) in holders.iter() {
        votes_client.set_votes(account, amount);
    }
    e.next_ledger();
}
