#![no_main]

use anchor_lang::prelude::Pubkey;
use libfuzzer_sys::fuzz_target;
use solana_options::{CoveredCall, Premium};

fuzz_target!(|data: &[u8]| {
    if data.len() < 40 {
        return;
    }

    let amount_base = u64::from_le_bytes(data[0..8].try_into().unwrap_or([0; 8]));
    let timestamp_expiry = i64::from_le_bytes(data[8..16].try_into().unwrap_or([0; 8]));
    let timestamp_created = i64::from_le_bytes(data[16..24].try_into().unwrap_or([0; 8]));

    // Mirrors initialize: zero amount and non-future expiry are rejected.
    let accepted = CoveredCall::validate_terms(amount_base, timestamp_expiry, timestamp_created).is_ok();
    assert_eq!(accepted, amount_base > 0 && timestamp_expiry > timestamp_created);
    if !accepted {
        return;
    }

    let mut covered_call = CoveredCall {
        bump: 255,
        seller: Pubkey::new_unique(),
        buyer: Pubkey::new_unique(),
        mint_base: Pubkey::new_unique(),
        mint_quote: Pubkey::new_unique(),
        amount_base,
        amount_quote: 0,
        premium: Premium::Unbought,
        timestamp_created,
        timestamp_expiry,
        padding: [0; 64],
    };
    assert!(covered_call.is_open_at(timestamp_created));

    // Remaining bytes are (timestamp, premium) purchase attempts.
    let mut paid: Option<u64> = None;
    for attempt in data[24..].chunks_exact(16) {
        let now = i64::from_le_bytes(attempt[0..8].try_into().unwrap_or([0; 8]));
        let amount_premium = u64::from_le_bytes(attempt[8..16].try_into().unwrap_or([0; 8]));

        let allowed = covered_call
            .validate_purchase(now, covered_call.mint_base, covered_call.buyer)
            .is_ok();
        assert_eq!(allowed, !covered_call.is_bought() && covered_call.is_open_at(now));
        if !allowed {
            continue;
        }
        assert!(now < timestamp_expiry);
        assert!(covered_call.record_purchase(amount_premium).is_ok());
        paid = Some(amount_premium);
    }

    if let Some(amount_premium) = paid {
        assert!(covered_call.record_purchase(amount_premium).is_err());
    }
    assert_eq!(covered_call.premium.amount(), paid);
    assert_eq!(covered_call.amount_base, amount_base);
});
