use anchor_lang::{error::ErrorCode, prelude::*};

use crate::Errors;

/// Premium paid for the option. `Bought` is terminal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Premium {
    Unbought,
    Bought(u64),
}

impl Premium {
    pub fn amount(&self) -> Option<u64> {
        match self {
            Premium::Unbought => None,
            Premium::Bought(amount) => Some(*amount),
        }
    }
}

/// One covered call, PDA seeds = [COVERED_CALL_SEED, seller].
/// Owns the ATAs holding the locked base tokens and the premium.
#[account]
pub struct CoveredCall {
    pub bump: u8,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub mint_base: Pubkey,
    pub mint_quote: Pubkey,
    pub amount_base: u64,
    /// Strike, denominated in `mint_quote`
    pub amount_quote: u64,
    pub premium: Premium,
    pub timestamp_created: i64,
    pub timestamp_expiry: i64,
    pub padding: [u8; 64],
}
impl Space for CoveredCall {
    const INIT_SPACE: usize = 8 + 1 + 32 + 32 + 32 + 32 + 8 + 8 + (1 + 8) + 8 + 8 + 64;
}

impl CoveredCall {
    pub fn validate_terms(amount_base: u64, timestamp_expiry: i64, now: i64) -> Result<()> {
        require!(timestamp_expiry > now, Errors::ExpiryIsInThePast);
        require!(amount_base > 0, Errors::AmountIsZero);
        Ok(())
    }

    /// Checks a purchase attempt in order: already bought, expired,
    /// premium mint, buyer.
    pub fn validate_purchase(&self, now: i64, mint_premium: Pubkey, buyer: Pubkey) -> Result<()> {
        require!(!self.is_bought(), Errors::OptionAlreadyBought);
        require!(self.is_open_at(now), Errors::OptionExpired);
        require_keys_eq!(self.mint_base, mint_premium, ErrorCode::ConstraintTokenMint);
        require_keys_eq!(self.buyer, buyer, ErrorCode::ConstraintHasOne);
        Ok(())
    }

    pub fn is_bought(&self) -> bool {
        matches!(self.premium, Premium::Bought(_))
    }

    pub fn is_open_at(&self, now: i64) -> bool {
        now < self.timestamp_expiry
    }

    pub fn record_purchase(&mut self, amount_premium: u64) -> Result<()> {
        require!(!self.is_bought(), Errors::OptionAlreadyBought);
        self.premium = Premium::Bought(amount_premium);
        Ok(())
    }
}
