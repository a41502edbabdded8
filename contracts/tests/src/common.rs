use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::{Address, Env};

//********** Token **********//

pub fn create_stellar_token<'a>(e: &Env, admin: &Address) -> (Address, MockTokenClient<'a>) {
    let contract_id = e.register_stellar_asset_contract(admin.clone());
    let client = MockTokenClient::new(e, &contract_id);
    // set admin to bump instance
    client.set_admin(admin);
    (contract_id, client)
}
