#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

mod constants;
pub use constants::*;
mod errors;
pub use errors::*;
mod events;
pub use events::*;
mod instructions;
pub use instructions::*;
mod states;
pub use states::*;
mod utils;
pub use utils::*;

declare_id!("7eyVmBDFpTdkvZSDnpFsSUqXoG4uXV6ejcK8s5ywJvo9");

#[program]
pub mod solana_options {
    use super::*;

    /// Lock `amount_base` of the base mint in a new covered call sold to `buyer`.
    pub fn initialize_covered_call(
        ctx: Context<InitializeCoveredCall>,
        amount_base: u64,
        amount_quote: u64,
        timestamp_expiry: i64,
    ) -> Result<()> {
        ctx.accounts.initialize_covered_call(
            &ctx.bumps,
            amount_base,
            amount_quote,
            timestamp_expiry,
        )
    }

    /// Pay `amount_premium` of the base mint into the vault and take the option.
    pub fn buy_covered_call(ctx: Context<BuyCoveredCall>, amount_premium: u64) -> Result<()> {
        ctx.accounts.buy_covered_call(amount_premium)
    }
}
