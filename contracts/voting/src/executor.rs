use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    log, panic_with_error, vec, Env, Val, Vec,
};

use crate::{errors::VotingError, types::Calldata};

/// Run an action script from the voting contract.
///
/// The calls are made in order. If any call fails, the entire invocation is aborted
/// with `ExecutionFailureError`, reverting every call made before it along with any
/// state the caller changed.
///
/// ### Arguments
/// * `action` - The calls to make
///
/// ### Panics
/// * If any call in the script fails
pub fn run_script(e: &Env, action: &Vec<Calldata>) {
    for (index, calldata) in action.iter().enumerate() {
        if !calldata.auths.is_empty() {
            e.authorize_as_current_contract(build_auth_vec(e, &calldata.auths));
        }
        let result = e.try_invoke_contract::<Val, VotingError>(
            &calldata.contract_id,
            &calldata.function,
            calldata.args.clone(),
        );
        if !matches!(result, Ok(Ok(_))) {
            log!(e, "action call failed", index as u32, calldata.function);
            panic_with_error!(e, VotingError::ExecutionFailureError);
        }
    }
}

/// Create an vec of auth entries the contract needs to sign to execute a calldata
fn build_auth_vec(e: &Env, auths: &Vec<Calldata>) -> Vec<InvokerContractAuthEntry> {
    let mut auth_vec: Vec<InvokerContractAuthEntry> = vec![e];
    for auth in auths.iter() {
        let pre_auth_entry = InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: auth.contract_id,
                fn_name: auth.function,
                args: auth.args,
            },
            sub_invocations: build_auth_vec(e, &auth.auths),
        });
        auth_vec.push_back(pre_auth_entry);
    }
    auth_vec
}
