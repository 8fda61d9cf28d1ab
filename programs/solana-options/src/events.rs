use anchor_lang::prelude::*;

#[event]
pub struct CoveredCallInitialized {
    pub covered_call: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub mint_base: Pubkey,
    pub mint_quote: Pubkey,
    pub amount_base: u64,
    pub amount_quote: u64,
    pub timestamp_expiry: i64,
    pub timestamp: i64,
}

#[event]
pub struct CoveredCallBought {
    pub covered_call: Pubkey,
    pub buyer: Pubkey,
    pub mint_premium: Pubkey,
    pub amount_premium: u64,
    pub timestamp: i64,
}
