use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked},
};

use crate::{
    get_current_timestamp, CoveredCall, CoveredCallInitialized, Premium, COVERED_CALL_SEED,
    LOG_PREFIX,
};

#[derive(Accounts)]
pub struct InitializeCoveredCall<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    pub buyer: SystemAccount<'info>,

    #[account(
        init,
        payer=seller,
        seeds=[COVERED_CALL_SEED.as_bytes(), seller.key().as_ref()],
        bump,
        space=CoveredCall::INIT_SPACE,
    )]
    pub covered_call: Account<'info, CoveredCall>,

    pub mint_base: Account<'info, Mint>,

    pub mint_quote: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint=mint_base,
        associated_token::authority=seller,
    )]
    pub seller_base_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer=seller,
        associated_token::mint=mint_base,
        associated_token::authority=covered_call,
    )]
    pub vault_base_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl<'info> InitializeCoveredCall<'info> {
    pub fn initialize_covered_call(
        &mut self,
        bumps: &InitializeCoveredCallBumps,
        amount_base: u64,
        amount_quote: u64,
        timestamp_expiry: i64,
    ) -> Result<()> {
        let current_timestamp = get_current_timestamp()?;

        CoveredCall::validate_terms(amount_base, timestamp_expiry, current_timestamp)?;

        self.covered_call.set_inner(CoveredCall {
            bump: bumps.covered_call,
            seller: self.seller.key(),
            buyer: self.buyer.key(),
            mint_base: self.mint_base.key(),
            mint_quote: self.mint_quote.key(),
            amount_base,
            amount_quote,
            premium: Premium::Unbought,
            timestamp_created: current_timestamp,
            timestamp_expiry,
            padding: [0; 64],
        });

        // lock base tokens in the vault; the token program rejects short balances
        let cpi_accounts = TransferChecked {
            from: self.seller_base_account.to_account_info(),
            mint: self.mint_base.to_account_info(),
            to: self.vault_base_account.to_account_info(),
            authority: self.seller.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);

        transfer_checked(cpi_ctx, amount_base, self.mint_base.decimals)?;

        emit!(CoveredCallInitialized {
            covered_call: self.covered_call.key(),
            seller: self.covered_call.seller,
            buyer: self.covered_call.buyer,
            mint_base: self.covered_call.mint_base,
            mint_quote: self.covered_call.mint_quote,
            amount_base,
            amount_quote,
            timestamp_expiry,
            timestamp: current_timestamp,
        });

        msg!(
            "{} initialized seller={} buyer={} amount_base={} expiry={}",
            LOG_PREFIX,
            self.covered_call.seller,
            self.covered_call.buyer,
            amount_base,
            timestamp_expiry
        );

        Ok(())
    }
}
