use crate::errors::FundraiserError;
use crate::events::DonationReceivedEvent;
use crate::storage::{DataKey, Donation};
use crate::treasury;
use soroban_sdk::{log, Address, Env, Vec};

pub fn total_donations(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalDonations)
        .unwrap_or(0)
}

pub fn donations_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::DonationsCount)
        .unwrap_or(0)
}

pub fn validate_amount(amount: i128) -> Result<(), FundraiserError> {
    if amount <= 0 {
        return Err(FundraiserError::ZeroAmount);
    }
    Ok(())
}

/// Append a donation to the ledger and credit the treasury.
///
/// Every new aggregate is computed before the first write, so a rejected
/// donation leaves the ledger, the donor index and the treasury untouched.
/// Both donation entry points go through here.
pub fn record_donation(
    env: &Env,
    donor: &Address,
    amount: i128,
    timestamp: u64,
) -> Result<u32, FundraiserError> {
    validate_amount(amount)?;

    let donation_id = donations_count(env);
    let next_count = donation_id
        .checked_add(1)
        .ok_or(FundraiserError::Overflow)?;
    let next_total = total_donations(env)
        .checked_add(amount)
        .ok_or(FundraiserError::Overflow)?;

    let mut indices = donor_indices(env, donor);
    indices.push_back(donation_id);

    // balance <= total, so this cannot overflow once next_total did not
    treasury::credit(env, amount)?;

    let donation = Donation {
        donor: donor.clone(),
        amount,
        timestamp,
    };
    env.storage()
        .persistent()
        .set(&DataKey::Donation(donation_id), &donation);
    env.storage()
        .persistent()
        .set(&DataKey::DonorDonations(donor.clone()), &indices);
    env.storage()
        .instance()
        .set(&DataKey::TotalDonations, &next_total);
    env.storage()
        .instance()
        .set(&DataKey::DonationsCount, &next_count);

    log!(env, "donation recorded", donor.clone(), amount, donation_id);
    DonationReceivedEvent {
        donor: donor.clone(),
        amount,
    }
    .publish(env);

    Ok(donation_id)
}

pub fn get_donation(env: &Env, donation_id: u32) -> Result<Donation, FundraiserError> {
    env.storage()
        .persistent()
        .get(&DataKey::Donation(donation_id))
        .ok_or(FundraiserError::DonationNotFound)
}

fn donor_indices(env: &Env, donor: &Address) -> Vec<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::DonorDonations(donor.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn my_donations_count(env: &Env, donor: &Address) -> u32 {
    donor_indices(env, donor).len()
}

/// Amounts and timestamps of `donor`'s donations, index-aligned, oldest first.
pub fn my_donations(
    env: &Env,
    donor: &Address,
) -> Result<(Vec<i128>, Vec<u64>), FundraiserError> {
    let mut amounts = Vec::new(env);
    let mut dates = Vec::new(env);
    for donation_id in donor_indices(env, donor).iter() {
        let donation = get_donation(env, donation_id)?;
        amounts.push_back(donation.amount);
        dates.push_back(donation.timestamp);
    }
    Ok((amounts, dates))
}
