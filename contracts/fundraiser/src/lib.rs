#![no_std]

mod errors;
mod events;
mod ledger;
mod metadata;
mod ownership;
mod storage;
mod token;
mod treasury;

pub use errors::FundraiserError;
pub use storage::{CampaignMetadata, Donation};

pub use events::{DonationReceivedEvent, InitializedEvent, OwnershipTransferredEvent, WithdrawEvent};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

#[contract]
pub struct FundraiserContract;

#[contractimpl]
impl FundraiserContract {
    /// Initialize the campaign. Metadata, beneficiary and token are fixed from here on.
    pub fn initialize(
        env: Env,
        name: String,
        url: String,
        image_url: String,
        description: String,
        beneficiary: Address,
        owner: Address,
        token: Address,
    ) -> Result<(), FundraiserError> {
        if metadata::is_initialized(&env) {
            return Err(FundraiserError::AlreadyInitialized);
        }

        // The owner consents to the role; the deployer may be anyone
        owner.require_auth();

        let campaign = CampaignMetadata {
            name,
            url,
            image_url,
            description,
            beneficiary: beneficiary.clone(),
        };
        metadata::validate(&campaign)?;

        metadata::write(&env, &campaign, &token);
        ownership::write_owner(&env, &owner);

        InitializedEvent {
            owner,
            beneficiary,
            token,
        }
        .publish(&env);

        Ok(())
    }

    /// Donate `amount` of the campaign token from `donor`
    pub fn donate(env: Env, donor: Address, amount: i128) -> Result<u32, FundraiserError> {
        let token_address = metadata::read_token(&env)?;

        donor.require_auth();
        ledger::validate_amount(amount)?;

        let contract_address = env.current_contract_address();
        token::transfer(&env, &token_address, &donor, &contract_address, &amount);

        ledger::record_donation(&env, &donor, amount, env.ledger().timestamp())
    }

    /// Record tokens sent straight to the contract address as a donation from `from`.
    ///
    /// Whatever the contract holds beyond the treasury balance is unaccounted
    /// and gets credited in full. Unaccounted tokens carry no sender, so they
    /// go to whoever calls `receive` first.
    pub fn receive(env: Env, from: Address) -> Result<u32, FundraiserError> {
        let token_address = metadata::read_token(&env)?;

        from.require_auth();

        let held = token::balance(&env, &token_address, &env.current_contract_address());
        let tracked = treasury::balance(&env);
        // Holdings below the tracked balance mean tokens left without a withdrawal
        if held < tracked {
            return Err(FundraiserError::BalanceMismatch);
        }

        ledger::record_donation(&env, &from, held - tracked, env.ledger().timestamp())
    }

    /// Send the whole treasury balance to the beneficiary (owner only)
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, FundraiserError> {
        treasury::withdraw(&env, caller)
    }

    /// Hand the owner role to `new_owner`.
    ///
    /// Requires authorization from the current owner. Emits an ownership transfer event.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), FundraiserError> {
        ownership::transfer_ownership(&env, caller, new_owner)
    }

    pub fn name(env: Env) -> Result<String, FundraiserError> {
        Ok(metadata::read(&env)?.name)
    }

    pub fn url(env: Env) -> Result<String, FundraiserError> {
        Ok(metadata::read(&env)?.url)
    }

    pub fn image_url(env: Env) -> Result<String, FundraiserError> {
        Ok(metadata::read(&env)?.image_url)
    }

    pub fn description(env: Env) -> Result<String, FundraiserError> {
        Ok(metadata::read(&env)?.description)
    }

    pub fn beneficiary(env: Env) -> Result<Address, FundraiserError> {
        Ok(metadata::read(&env)?.beneficiary)
    }

    /// Get all campaign descriptors at once
    pub fn metadata(env: Env) -> Result<CampaignMetadata, FundraiserError> {
        metadata::read(&env)
    }

    pub fn owner(env: Env) -> Result<Address, FundraiserError> {
        ownership::read_owner(&env)
    }

    pub fn token(env: Env) -> Result<Address, FundraiserError> {
        metadata::read_token(&env)
    }

    /// Lifetime sum of all donations. Withdrawals do not reduce it.
    pub fn total_donations(env: Env) -> i128 {
        ledger::total_donations(&env)
    }

    pub fn donations_count(env: Env) -> u32 {
        ledger::donations_count(&env)
    }

    /// Amount the owner could withdraw right now
    pub fn balance(env: Env) -> i128 {
        treasury::balance(&env)
    }

    pub fn get_donation(env: Env, donation_id: u32) -> Result<Donation, FundraiserError> {
        ledger::get_donation(&env, donation_id)
    }

    pub fn my_donations_count(env: Env, donor: Address) -> u32 {
        ledger::my_donations_count(&env, &donor)
    }

    pub fn my_donation_amounts(env: Env, donor: Address) -> Result<Vec<i128>, FundraiserError> {
        Ok(ledger::my_donations(&env, &donor)?.0)
    }

    pub fn my_donation_dates(env: Env, donor: Address) -> Result<Vec<u64>, FundraiserError> {
        Ok(ledger::my_donations(&env, &donor)?.1)
    }

    /// Amounts and dates of `donor`'s donations, oldest first
    pub fn my_donations(
        env: Env,
        donor: Address,
    ) -> Result<(Vec<i128>, Vec<u64>), FundraiserError> {
        ledger::my_donations(&env, &donor)
    }
}
