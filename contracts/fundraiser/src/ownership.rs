use crate::errors::FundraiserError;
use crate::events::OwnershipTransferredEvent;
use crate::storage::DataKey;
use soroban_sdk::{log, Address, Env};

pub fn read_owner(env: &Env) -> Result<Address, FundraiserError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(FundraiserError::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

/// Checks `caller` against the owner stored right now, then requires its signature.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), FundraiserError> {
    let owner = read_owner(env)?;
    if *caller != owner {
        return Err(FundraiserError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn transfer_ownership(
    env: &Env,
    caller: Address,
    new_owner: Address,
) -> Result<(), FundraiserError> {
    require_owner(env, &caller)?;
    write_owner(env, &new_owner);

    log!(env, "ownership transferred", caller, new_owner);
    OwnershipTransferredEvent {
        previous_owner: caller,
        new_owner,
    }
    .publish(env);

    Ok(())
}
