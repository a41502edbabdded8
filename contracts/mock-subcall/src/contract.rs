use sep_41_token::TokenClient;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short, Address,
    Env, Symbol,
};

const CONFIG_KEY: Symbol = symbol_short!("config");
const LEDGER_THRESHOLD: u32 = 14 * 17280;
const LEDGER_BUMP: u32 = 15 * 17280;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContractError {
    AlreadyInitializedError = 256,
    Failed = 257,
    NotInitializedError = 258,
}

/// The token pulled by `subcall` and the voting contract it is pulled from
#[derive(Clone)]
#[contracttype]
pub struct SubcallConfig {
    pub token: Address,
    pub voting: Address,
}

#[contract]
pub struct SubcallContract;

#[contractimpl]
impl SubcallContract {
    pub fn initialize(e: Env, token: Address, voting: Address) {
        if e.storage().instance().has(&CONFIG_KEY) {
            panic_with_error!(&e, ContractError::AlreadyInitializedError);
        }
        e.storage()
            .instance()
            .set(&CONFIG_KEY, &SubcallConfig { token, voting });
        e.storage()
            .instance()
            .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
    }

    /// Pull `amount` tokens from the voting contract. Requires the voting contract to
    /// authorize both this call and the token transfer.
    pub fn subcall(e: Env, amount: i128) {
        let config = load_config(&e);
        config.voting.require_auth();

        TokenClient::new(&e, &config.token).transfer(
            &config.voting,
            &e.current_contract_address(),
            &amount,
        );
    }

    /// Always fails
    pub fn fail(e: Env) {
        panic_with_error!(&e, ContractError::Failed);
    }
}

fn load_config(e: &Env) -> SubcallConfig {
    match e.storage().instance().get::<Symbol, SubcallConfig>(&CONFIG_KEY) {
        Some(config) => config,
        None => panic_with_error!(e, ContractError::NotInitializedError),
    }
}
