use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

use crate::{
    get_current_timestamp, CoveredCall, CoveredCallBought, COVERED_CALL_SEED, LOG_PREFIX,
};

#[derive(Accounts)]
pub struct BuyCoveredCall<'info> {
    #[account(
        mut,
        seeds=[COVERED_CALL_SEED.as_bytes(), covered_call.seller.as_ref()],
        bump=covered_call.bump,
    )]
    pub covered_call: Account<'info, CoveredCall>,

    pub buyer: Signer<'info>,

    pub mint_premium: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint=mint_premium,
        associated_token::authority=buyer,
    )]
    pub buyer_premium_account: Account<'info, TokenAccount>,

    /// Must already exist; created by `initialize_covered_call`
    #[account(
        mut,
        associated_token::mint=mint_premium,
        associated_token::authority=covered_call,
    )]
    pub vault_premium_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> BuyCoveredCall<'info> {
    pub fn buy_covered_call(&mut self, amount_premium: u64) -> Result<()> {
        let current_timestamp = get_current_timestamp()?;

        self.covered_call.validate_purchase(
            current_timestamp,
            self.mint_premium.key(),
            self.buyer.key(),
        )?;

        let cpi_accounts = TransferChecked {
            from: self.buyer_premium_account.to_account_info(),
            mint: self.mint_premium.to_account_info(),
            to: self.vault_premium_account.to_account_info(),
            authority: self.buyer.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);

        transfer_checked(cpi_ctx, amount_premium, self.mint_premium.decimals)?;

        self.covered_call.record_purchase(amount_premium)?;

        emit!(CoveredCallBought {
            covered_call: self.covered_call.key(),
            buyer: self.buyer.key(),
            mint_premium: self.mint_premium.key(),
            amount_premium,
            timestamp: current_timestamp,
        });

        msg!(
            "{} bought covered_call={} buyer={} amount_premium={}",
            LOG_PREFIX,
            self.covered_call.key(),
            self.buyer.key(),
            amount_premium
        );

        Ok(())
    }
}
