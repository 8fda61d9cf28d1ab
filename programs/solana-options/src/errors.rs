use anchor_lang::error_code;

#[error_code]
pub enum Errors {
    #[msg("Expiry is in the past")]
    ExpiryIsInThePast,
    #[msg("Option has expired")]
    OptionExpired,
    #[msg("Option has already been bought")]
    OptionAlreadyBought,
    #[msg("Amount must be greater than zero")]
    AmountIsZero,
    #[msg("No valid bump found for the covered call address")]
    AddressDerivationExhausted,
}
