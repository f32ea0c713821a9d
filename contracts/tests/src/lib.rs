#![cfg(test)]
extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, String,
};

use fundraiser::{FundraiserContract, FundraiserContractClient as FundraiserClient, FundraiserError};

struct Campaign<'a> {
    fundraiser: FundraiserClient<'a>,
    token: TokenClient<'a>,
    token_admin: StellarAssetClient<'a>,
    owner: Address,
    beneficiary: Address,
}

fn deploy_campaign<'a>(env: &Env) -> Campaign<'a> {
    let issuer = Address::generate(env);
    let owner = Address::generate(env);
    let beneficiary = Address::generate(env);

    let sac = env.register_stellar_asset_contract_v2(issuer);
    let token = TokenClient::new(env, &sac.address());
    let token_admin = StellarAssetClient::new(env, &sac.address());

    let fundraiser_id = env.register(FundraiserContract, ());
    let fundraiser = FundraiserClient::new(env, &fundraiser_id);

    fundraiser.initialize(
        &String::from_str(env, "Beneficiary name"),
        &String::from_str(env, "beneficiaryname.org"),
        &String::from_str(env, "https://placekitten.com/600/350"),
        &String::from_str(env, "Beneficiary description"),
        &beneficiary,
        &owner,
        &token.address,
    );

    Campaign {
        fundraiser,
        token,
        token_admin,
        owner,
        beneficiary,
    }
}

#[test]
fn test_fundraiser_donate_then_withdraw_e2e() {
    let env = Env::default();
    env.mock_all_auths();

    let campaign = deploy_campaign(&env);
    let donor = Address::generate(&env);
    campaign.token_admin.mint(&donor, &1_000);

    // Donor D donates 100
    env.ledger().set_timestamp(1_000);
    campaign.fundraiser.donate(&donor, &100);

    assert_eq!(campaign.fundraiser.total_donations(), 100);
    assert_eq!(campaign.fundraiser.donations_count(), 1);
    assert_eq!(campaign.fundraiser.my_donations_count(&donor), 1);
    assert_eq!(campaign.fundraiser.my_donation_amounts(&donor), vec![&env, 100i128]);

    // Owner sweeps the treasury to the beneficiary
    let beneficiary_before = campaign.token.balance(&campaign.beneficiary);
    let withdrawn = campaign.fundraiser.withdraw(&campaign.owner);
    let beneficiary_after = campaign.token.balance(&campaign.beneficiary);

    assert_eq!(withdrawn, 100);
    assert_eq!(beneficiary_after - beneficiary_before, 100);
    assert_eq!(campaign.fundraiser.balance(), 0);
    // Historical total is not reduced by withdrawal
    assert_eq!(campaign.fundraiser.total_donations(), 100);
}

#[test]
fn test_fundraiser_access_control_e2e() {
    let env = Env::default();
    env.mock_all_auths();

    let campaign = deploy_campaign(&env);
    let donor = Address::generate(&env);
    campaign.token_admin.mint(&donor, &1_000);
    campaign.fundraiser.donate(&donor, &100);

    // Non-owner cannot withdraw
    let unauthorized = Address::generate(&env);
    assert_eq!(
        campaign.fundraiser.try_withdraw(&unauthorized),
        Err(Ok(FundraiserError::Unauthorized))
    );
    assert_eq!(campaign.fundraiser.balance(), 100);

    // Ownership moves from O to O2
    let new_owner = Address::generate(&env);
    campaign
        .fundraiser
        .transfer_ownership(&campaign.owner, &new_owner);
    assert_eq!(campaign.fundraiser.owner(), new_owner);

    // O is no longer privileged, O2 is
    assert_eq!(
        campaign.fundraiser.try_withdraw(&campaign.owner),
        Err(Ok(FundraiserError::Unauthorized))
    );
    assert_eq!(campaign.fundraiser.withdraw(&new_owner), 100);
    assert_eq!(campaign.token.balance(&campaign.beneficiary), 100);
}

#[test]
fn test_fundraiser_bare_transfer_e2e() {
    let env = Env::default();
    env.mock_all_auths();

    let explicit = deploy_campaign(&env);
    let bare = deploy_campaign(&env);

    let donor = Address::generate(&env);
    explicit.token_admin.mint(&donor, &1_000);
    let anonymous = Address::generate(&env);
    bare.token_admin.mint(&anonymous, &1_000);

    env.ledger().set_timestamp(7_777);

    explicit.fundraiser.donate(&donor, &50);

    // Anonymous sends tokens without calling donate, then has them recorded
    bare.token.transfer(&anonymous, &bare.fundraiser.address, &50);
    bare.fundraiser.receive(&anonymous);

    assert_eq!(bare.fundraiser.total_donations(), 50);
    assert_eq!(
        bare.fundraiser.total_donations(),
        explicit.fundraiser.total_donations()
    );
    assert_eq!(
        bare.fundraiser.donations_count(),
        explicit.fundraiser.donations_count()
    );
    assert_eq!(bare.fundraiser.balance(), explicit.fundraiser.balance());
    assert_eq!(
        bare.fundraiser.my_donations(&anonymous),
        explicit.fundraiser.my_donations(&donor)
    );

    // Both sweeps deliver the same amount
    assert_eq!(
        bare.fundraiser.withdraw(&bare.owner),
        explicit.fundraiser.withdraw(&explicit.owner)
    );

    std::println!("fundraiser bare transfer scenario passed");
}

#[test]
fn test_fundraiser_many_donors_e2e() {
    let env = Env::default();
    env.mock_all_auths();

    let campaign = deploy_campaign(&env);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    campaign.token_admin.mint(&alice, &10_000);
    campaign.token_admin.mint(&bob, &10_000);

    let alice_amounts = [5i128, 15, 25];
    let bob_amounts = [100i128, 200];

    for (i, amount) in alice_amounts.iter().enumerate() {
        env.ledger().set_timestamp(100 * (i as u64 + 1));
        campaign.fundraiser.donate(&alice, amount);
        if let Some(bob_amount) = bob_amounts.get(i) {
            campaign.fundraiser.donate(&bob, bob_amount);
        }
    }

    assert_eq!(
        campaign.fundraiser.my_donation_amounts(&alice),
        vec![&env, 5i128, 15, 25]
    );
    assert_eq!(
        campaign.fundraiser.my_donation_dates(&alice),
        vec![&env, 100u64, 200, 300]
    );
    assert_eq!(
        campaign.fundraiser.my_donation_amounts(&bob),
        vec![&env, 100i128, 200]
    );

    let total: i128 = alice_amounts.iter().chain(bob_amounts.iter()).sum();
    assert_eq!(campaign.fundraiser.total_donations(), total);
    assert_eq!(campaign.fundraiser.donations_count(), 5);
    assert_eq!(campaign.token.balance(&campaign.fundraiser.address), total);

    assert_eq!(campaign.fundraiser.withdraw(&campaign.owner), total);
    assert_eq!(campaign.token.balance(&campaign.beneficiary), total);
}
