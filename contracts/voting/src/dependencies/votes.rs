use soroban_sdk::{contractclient, Address, Env};

/// The interface of the contract tracking voting power, like a votes token
#[contractclient(name = "VotesClient")]
pub trait Votes {
    /// Get the current total supply of voting power
    fn total_supply(e: Env) -> i128;

    /// Get the total supply of voting power at a specific ledger sequence number.
    /// The ledger must be closed before the sequence number can be used.
    ///
    /// ### Arguments
    /// * `sequence` - The sequence number to get the total voting power at
    fn get_past_total_supply(e: Env, sequence: u32) -> i128;

    /// Get the current voting power of an account
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    fn get_votes(e: Env, account: Address) -> i128;

    /// Get the voting power of an account at a specific ledger sequence number.
    /// The ledger must be closed before the sequence number can be used.
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    /// * `sequence` - The sequence number to get the voting power at
    fn get_past_votes(e: Env, account: Address, sequence: u32) -> i128;
}
