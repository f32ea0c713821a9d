use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Metadata,                // -> CampaignMetadata
    Owner,                   // -> Address
    Token,                   // -> Address
    TotalDonations,          // -> i128
    DonationsCount,          // -> u32
    Balance,                 // -> i128
    Donation(u32),           // donation_id -> Donation
    DonorDonations(Address), // donor -> Vec<u32>
}

/// Campaign descriptors, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignMetadata {
    pub name: String,
    pub url: String,
    pub image_url: String,
    pub description: String,
    pub beneficiary: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub donor: Address,
    pub amount: i128,
    pub timestamp: u64,
}
