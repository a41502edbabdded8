#[cfg(test)]
use mock_votes::MockTokenVotesClient;
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, Symbol,
};
use soroban_voting::{
    types::{ProposalStatus, VoterState},
    VotingContractClient,
};
use tests::{
    env::EnvTestUtils,
    votes::distribute_votes,
    voting::{create_voting, default_proposal_data, default_voting_settings, transfer_action},
};

#[test]
fn test_create_proposal() {
    let e = Env::default();
    e.set_default_info();
    e.mock_all_auths();

    let bombadil = Address::generate(&e);
    let frodo = Address::generate(&e);
    let samwise = Address::generate(&e);

    let settings = default_voting_settings();
    let (voting_address, votes_address) = create_voting(&e, &bombadil, &settings);
    let voting_client = VotingContractClient::new(&e, &voting_address);
    let votes_client = MockTokenVotesClient::new(&e, &votes_address);
    distribute_votes(&e, &votes_client, &[(&frodo, 80), (&samwise, 20)]);

    let metadata = String::from_str(&e, "# Fund the ents");
    let action = transfer_action(&e, &Address::generate(&e), &voting_address, &samwise, 1);
    let proposal_id = voting_client.create_proposal(&frodo, &metadata, &action, &false, &false);

    // validate events
    let events = e.events().all();
    let tx_events = vec![&e, events.last().unwrap()];
    assert_eq!(
        tx_events,
        vec![
            &e,
            (
                voting_address.clone(),
                (Symbol::new(&e, "proposal_created"), proposal_id, frodo.clone()).into_val(&e),
                metadata.into_val(&e)
            )
        ]
    );

    // validate chain results
    assert_eq!(proposal_id, 0);
    assert_eq!(voting_client.proposal_count(), 1);
    let proposal = voting_client.get_vote(&proposal_id);
    assert_eq!(proposal.id, 0);
    assert_eq!(proposal.config.metadata, metadata);
    assert_eq!(proposal.config.action.len(), 1);
    assert_eq!(
        proposal.config.action.get_unchecked(0).function,
        Symbol::new(&e, "transfer")
    );
    assert_eq!(proposal.data.creator, frodo);
    assert_eq!(proposal.data.start_time, e.ledger().timestamp());
    assert_eq!(proposal.data.voting_duration, settings.voting_duration);
    assert_eq!(proposal.data.snapshot, e.ledger().sequence() - 1);
    assert_eq!(proposal.data.support_required_pct, settings.support_required_pct);
    assert_eq!(proposal.data.min_quorum_pct, settings.min_quorum_pct);
    assert_eq!(proposal.data.settings_version, 1);
    assert_eq!(proposal.data.total_power, 100);
    assert!(!proposal.data.live_snapshot);
    assert!(!proposal.data.executed);
    assert_eq!(proposal.votes.yea, 0);
    assert_eq!(proposal.votes.nay, 0);
    assert_eq!(
        voting_client.get_voter_state(&proposal_id, &frodo),
        VoterState::Absent
    );
    assert_eq!(voting_client.get_status(&proposal_id), ProposalStatus::Active);

    // ids increase
    let (metadata, action) = default_proposal_data(&e);
    let next_id = voting_client.create_proposal(&samwise, &metadata, &action, &false, &false);
    assert_eq!(next_id, 1);
    assert_eq!(voting_client.proposal_count(), 2);
}

#[test]
fn test_create_proposal_and_vote() {
    let e = Env::default();
    e.set_default_info();
    e.mock_all_auths();

    let bombadil = Address::generate(&e);
    let frodo = Address::generate(&e);
    let samwise = Address::generate(&e);

    let mut settings = default_voting_settings();
    settings.early_execution = false;
    let (voting_address, votes_address) = create_voting(&e, &bombadil, &settings);
    let voting_client = VotingContractClient::new(&e, &voting_address);
    let votes_client = MockTokenVotesClient::new(&e, &votes_address);
    distribute_votes(&e, &votes_client, &[(&frodo, 80), (&samwise, 20)]);

    let (metadata, action) = default_proposal_data(&e);
    let proposal_id = voting_client.create_proposal(&frodo, &metadata, &action, &true, &true);

    assert_eq!(voting_client.get_voter_state(&proposal_id, &frodo), VoterState::Yea);
    let proposal = voting_client.get_vote(&proposal_id);
    assert_eq!(proposal.votes.yea, 80);
    assert_eq!(proposal.votes.nay, 0);
    // decided, but early execution is disabled
    assert!(!proposal.data.executed);
    assert_eq!(voting_client.get_status(&proposal_id), ProposalStatus::Decided);

    // the creator's vote is a normal vote and can be changed
    voting_client.vote(&frodo, &proposal_id, &false, &false);
    let proposal = voting_client.get_vote(&proposal_id);
    assert_eq!(proposal.votes.yea, 0);
    assert_eq!(proposal.votes.nay, 80);
}

#[test]
fn test_create_proposal_and_vote_executes() {
    let e = Env::default();
    e.set_default_info();
    e.mock_all_auths();

    let bombadil = Address::generate(&e);
    let frodo = Address::generate(&e);
    let samwise = Address::generate(&e);

    let settings = default_voting_settings();
    let (voting_address, votes_address) = create_voting(&e, &bombadil, &settings);
    let voting_client = VotingContractClient::new(&e, &voting_address);
    let votes_client = MockTokenVotesClient::new(&e, &votes_address);
    distribute_votes(&e, &votes_client, &[(&frodo, 80), (&samwise, 20)]);

    let (metadata, action) = default_proposal_data(&e);
    let proposal_id = voting_client.create_proposal(&frodo, &metadata, &action, &true, &true);

    let proposal = voting_client.get_vote(&proposal_id);
    assert!(proposal.data.executed);
    assert_eq!(voting_client.get_status(&proposal_id), ProposalStatus::Executed);

    let events = e.events().all();
    let tx_events = vec![&e, events.last().unwrap()];
    assert_eq!(
        tx_events,
        vec![
            &e,
            (
                voting_address.clone(),
                (Symbol::new(&e, "proposal_executed"), proposal_id).into_val(&e),
                ().into_val(&e)
            )
        ]
    );
}

#[test]
fn test_create_proposal_creator_without_power_does_not_vote() {
    let e = Env::default();
    e.set_default_info();
    e.mock_all_auths();

    let bombadil = Address::generate(&e);
    let frodo = Address::generate(&e);
    let gandalf = Address::generate(&e);

    let settings = default_voting_settings();
    let (voting_address, votes_address) = create_voting(&e, &bombadil, &settings);
    let voting_client = VotingContractClient::new(&e, &voting_address);
    let votes_client = MockTokenVotesClient::new(&e, &votes_address);
    distribute_votes(&e, &votes_client, &[(&frodo, 100)]);

    let (metadata, action) = default_proposal_data(&e);
    let proposal_id = voting_client.create_proposal(&gandalf, &metadata, &action, &true, &true);

    assert_eq!(
        voting_client.get_voter_state(&proposal_id, &gandalf),
        VoterState::Absent
    );
    let proposal = voting_client.get_vote(&proposal_id);
    assert_eq!(proposal.data.creator, gandalf);
    assert_eq!(proposal.votes.yea, 0);
}

#[test]
fn test_create_proposal_ignores_power_from_open_ledger() {
    let e = Env::default();
    e.set_default_info();
    e.mock_all_auths();

    let bombadil = Address::generate(&e);
    let frodo = Address::generate(&e);
    let samwise = Address::generate(&e);

    let settings = default_voting_settings();
    let (voting_address, votes_address) = create_voting(&e, &bombadil, &settings);
    let voting_client = VotingContractClient::new(&e, &voting_address);
    let votes_client = MockTokenVotesClient::new(&e, &votes_address);
    distribute_votes(&e, &votes_client, &[(&frodo, 100)]);

    // samwise gains power in the same ledger the proposal is created
    votes_client.set_votes(&samwise, &1_000);
    let (metadata, action) = default_proposal_data(&e);
    let proposal_id = voting_client.create_proposal(&samwise, &metadata, &action, &true, &true);

    let proposal = voting_client.get_vote(&proposal_id);
    assert_eq!(proposal.data.total_power, 100);
    assert_eq!(proposal.votes.yea, 0);
    assert!(!proposal.data.executed);
    assert_eq!(
        voting_client.get_voter_state(&proposal_id, &samwise),
        VoterState::Absent
    );

    // the new power is still excluded once the ledger closes
    e.next_ledger();
    assert!(!voting_client.can_vote(&proposal_id, &samwise));
    assert!(voting_client.can_vote(&proposal_id, &frodo));
}

#[test]
fn test_create_proposal_uses_settings_at_creation() {
    let e = Env::default();
    e.set_default_info();
    e.mock_all_auths();

    let bombadil = Address::generate(&e);
    let frodo = Address::generate(&e);

    let settings = default_voting_settings();
    let (voting_address, votes_address) = create_voting(&e, &bombadil, &settings);
    let voting_client = VotingContractClient::new(&e, &voting_address);
    let votes_client = MockTokenVotesClient::new(&e, &votes_address);
    distribute_votes(&e, &votes_client, &[(&frodo, 100)]);

    let (metadata, action) = default_proposal_data(&e);
    let first_id = voting_client.create_proposal(&frodo, &metadata, &action, &false, &false);

    let new_support = settings.support_required_pct + 1;
    voting_client.set_support_required_pct(&new_support);
    voting_client.set_voting_duration(&(settings.voting_duration * 2));
    let second_id = voting_client.create_proposal(&frodo, &metadata, &action, &false, &false);

    let first = voting_client.get_vote(&first_id);
    assert_eq!(first.data.support_required_pct, settings.support_required_pct);
    assert_eq!(first.data.voting_duration, settings.voting_duration);
    assert_eq!(first.data.settings_version, 1);

    let second = voting_client.get_vote(&second_id);
    assert_eq!(second.data.support_required_pct, new_support);
    assert_eq!(second.data.voting_duration, settings.voting_duration * 2);
    assert_eq!(second.data.settings_version, 3);
}

#[test]
#[should_panic(expected = "Error(Contract, #202)")]
fn test_create_proposal_no_voting_power() {
    let e = Env::default();
    e.set_default_info();
    e.mock_all_auths();

    let bombadil = Address::generate(&e);
    let frodo = Address::generate(&e);

    let settings = default_voting_settings();
    let (voting_address, _) = create_voting(&e, &bombadil, &settings);
    let voting_client = VotingContractClient::new(&e, &voting_address);
    e.next_ledger();

    let (metadata, action) = default_proposal_data(&e);
    voting_client.create_proposal(&frodo, &metadata, &action, &false, &false);
}

#[test]
#[should_panic(expected = "Error(Contract, #203)")]
fn test_get_vote_nonexistent_proposal() {
    let e = Env::default();
    e.set_default_info();
    e.mock_all_auths();

    let bombadil = Address::generate(&e);
    let settings = default_voting_settings();
    let (voting_address, _) = create_voting(&e, &bombadil, &settings);
    let voting_client = VotingContractClient::new(&e, &voting_address);

    voting_client.get_vote(&0);
}

#[test]
#[should_panic(expected = "Error(Contract, #203)")]
fn test_get_voter_state_nonexistent_proposal() {
    let e = Env::default();
    e.set_default_info();
    e.mock_all_auths();

    let bombadil = Address::generate(&e);
    let frodo = Address::generate(&e);
    let settings = default_voting_settings();
    let (voting_address, _) = create_voting(&e, &bombadil, &settings);
    let voting_client = VotingContractClient::new(&e, &voting_address);

    voting_client.get_voter_state(&0, &frodo);
}
