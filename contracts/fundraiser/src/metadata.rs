use crate::errors::FundraiserError;
use crate::storage::{CampaignMetadata, DataKey};
use soroban_sdk::{Address, Env};

pub const MAX_NAME_LEN: u32 = 64;
pub const MAX_URL_LEN: u32 = 256;
pub const MAX_DESCRIPTION_LEN: u32 = 1024;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Metadata)
}

/// A campaign needs a name; the other descriptors may be left empty.
pub fn validate(metadata: &CampaignMetadata) -> Result<(), FundraiserError> {
    if metadata.name.is_empty() || metadata.name.len() > MAX_NAME_LEN {
        return Err(FundraiserError::InvalidMetadata);
    }
    if metadata.url.len() > MAX_URL_LEN || metadata.image_url.len() > MAX_URL_LEN {
        return Err(FundraiserError::InvalidMetadata);
    }
    if metadata.description.len() > MAX_DESCRIPTION_LEN {
        return Err(FundraiserError::InvalidMetadata);
    }
    Ok(())
}

pub fn write(env: &Env, metadata: &CampaignMetadata, token: &Address) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn read(env: &Env) -> Result<CampaignMetadata, FundraiserError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(FundraiserError::NotInitialized)
}

pub fn read_token(env: &Env) -> Result<Address, FundraiserError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(FundraiserError::NotInitialized)
}
