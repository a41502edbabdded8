use crate::{
    checkpoints::{add_checkpoint, upper_lookup, Checkpoint},
    storage,
};
use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MockVotesError {
    SequenceNotClosedError = 102,
}

#[contract]
pub struct MockTokenVotes;

pub trait MockVotesTrait {
    /// Get the current total voting power
    fn total_supply(e: Env) -> i128;

    /// Get the total voting power at a closed ledger sequence number
    ///
    /// ### Arguments
    /// * `sequence` - The ledger sequence number to get the total voting power at
    fn get_past_total_supply(e: Env, sequence: u32) -> i128;

    /// Get the current voting power of an account
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    fn get_votes(e: Env, account: Address) -> i128;

    /// Get the voting power of an account at a closed ledger sequence number
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    /// * `sequence` - The ledger sequence number to get the voting power at
    fn get_past_votes(e: Env, account: Address, sequence: u32) -> i128;

    /// Set the voting power of an account, starting at the current ledger
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    /// * `amount` - The voting power of the account
    fn set_votes(e: Env, account: Address, amount: i128);
}

#[contractimpl]
impl MockVotesTrait for MockTokenVotes {
    fn total_supply(e: Env) -> i128 {
        current_amount(&storage::get_total_supply_checkpoints(&e))
    }

    fn get_past_total_supply(e: Env, sequence: u32) -> i128 {
        require_closed_sequence(&e, sequence);
        upper_lookup(&storage::get_total_supply_checkpoints(&e), sequence)
    }

    fn get_votes(e: Env, account: Address) -> i128 {
        current_amount(&storage::get_user_checkpoints(&e, &account))
    }

    fn get_past_votes(e: Env, account: Address, sequence: u32) -> i128 {
        require_closed_sequence(&e, sequence);
        upper_lookup(&storage::get_user_checkpoints(&e, &account), sequence)
    }

    fn set_votes(e: Env, account: Address, amount: i128) {
        let sequence = e.ledger().sequence();

        let mut user_checkpoints = storage::get_user_checkpoints(&e, &account);
        let old_amount = current_amount(&user_checkpoints);
        add_checkpoint(&mut user_checkpoints, &Checkpoint { sequence, amount });
        storage::set_user_checkpoints(&e, &account, &user_checkpoints);

        let mut supply_checkpoints = storage::get_total_supply_checkpoints(&e);
        let supply = current_amount(&supply_checkpoints) - old_amount + amount;
        add_checkpoint(
            &mut supply_checkpoints,
            &Checkpoint {
                sequence,
                amount: supply,
            },
        );
        storage::set_total_supply_checkpoints(&e, &supply_checkpoints);
    }
}

fn current_amount(checkpoints: &soroban_sdk::Vec<Checkpoint>) -> i128 {
    checkpoints.last().map(|checkpoint| checkpoint.amount).unwrap_or(0)
}

/// History can only be read for ledgers that have closed
fn require_closed_sequence(e: &Env, sequence: u32) {
    if sequence >= e.ledger().sequence() {
        panic_with_error!(e, MockVotesError::SequenceNotClosedError);
    }
}
