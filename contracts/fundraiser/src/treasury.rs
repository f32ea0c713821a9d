use crate::errors::FundraiserError;
use crate::events::WithdrawEvent;
use crate::storage::DataKey;
use crate::{metadata, ownership, token};
use soroban_sdk::{log, Address, Env};

/// Currently withdrawable amount. Distinct from the lifetime donation total.
pub fn balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Balance)
        .unwrap_or(0)
}

fn write_balance(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Balance, &amount);
}

pub(crate) fn credit(env: &Env, amount: i128) -> Result<(), FundraiserError> {
    let next = balance(env)
        .checked_add(amount)
        .ok_or(FundraiserError::Overflow)?;
    write_balance(env, next);
    Ok(())
}

/// Sweep the whole balance to the beneficiary (owner only).
///
/// The balance is zeroed before the token contract is called. If the
/// beneficiary cannot receive the funds the balance is written back and the
/// call fails with [`FundraiserError::TransferFailed`].
pub fn withdraw(env: &Env, caller: Address) -> Result<i128, FundraiserError> {
    ownership::require_owner(env, &caller)?;

    let beneficiary = metadata::read(env)?.beneficiary;
    let token_address = metadata::read_token(env)?;

    let amount = balance(env);
    if amount == 0 {
        return Err(FundraiserError::NothingToWithdraw);
    }

    write_balance(env, 0);

    let contract_address = env.current_contract_address();
    if !token::try_transfer(env, &token_address, &contract_address, &beneficiary, &amount) {
        write_balance(env, amount);
        log!(env, "withdrawal rejected by beneficiary", beneficiary, amount);
        return Err(FundraiserError::TransferFailed);
    }

    log!(env, "withdrawn", beneficiary, amount);
    WithdrawEvent {
        beneficiary,
        amount,
    }
    .publish(env);

    Ok(amount)
}
