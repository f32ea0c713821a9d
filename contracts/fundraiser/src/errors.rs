use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundraiserError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ZeroAmount = 4,
    NothingToWithdraw = 5,
    TransferFailed = 6,
    InvalidMetadata = 7,
    DonationNotFound = 8,
    Overflow = 9,
    BalanceMismatch = 10,
}
