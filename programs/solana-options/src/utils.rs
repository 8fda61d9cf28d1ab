use anchor_lang::prelude::*;
use solana_program::clock;

use crate::{Errors, COVERED_CALL_SEED};

pub fn get_current_timestamp() -> Result<i64> {
    Ok(clock::Clock::get()?.unix_timestamp)
}

/// Derives the covered call address and its canonical bump for `seller`
/// under this program's id.
pub fn find_covered_call_address(seller: &Pubkey) -> Result<(Pubkey, u8)> {
    find_covered_call_address_with_program_id(seller, &crate::ID)
}

pub fn find_covered_call_address_with_program_id(
    seller: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[COVERED_CALL_SEED.as_bytes(), seller.as_ref()],
        program_id,
    )
    .ok_or_else(|| error!(Errors::AddressDerivationExhausted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn pubkey_from(parts: (u64, u64, u64, u64)) -> Pubkey {
        let mut bytes = [0u8; 32];
        bytes[0..8].copy_from_slice(&parts.0.to_le_bytes());
        bytes[8..16].copy_from_slice(&parts.1.to_le_bytes());
        bytes[16..24].copy_from_slice(&parts.2.to_le_bytes());
        bytes[24..32].copy_from_slice(&parts.3.to_le_bytes());
        Pubkey::new_from_array(bytes)
    }

    #[test]
    fn address_matches_runtime_derivation() {
        let seller = Pubkey::new_unique();
        let (address, bump) = find_covered_call_address(&seller).unwrap();

        let expected = Pubkey::create_program_address(
            &[COVERED_CALL_SEED.as_bytes(), seller.as_ref(), &[bump]],
            &crate::ID,
        )
        .unwrap();
        assert_eq!(address, expected);
        assert!(!address.is_on_curve());
    }

    #[test]
    fn address_depends_on_program_id() {
        let seller = Pubkey::new_unique();
        let (ours, _) = find_covered_call_address(&seller).unwrap();
        let (other, _) =
            find_covered_call_address_with_program_id(&seller, &Pubkey::new_unique()).unwrap();
        assert_ne!(ours, other);
    }

    quickcheck! {
        fn derivation_is_deterministic(seller: (u64, u64, u64, u64)) -> bool {
            let seller = pubkey_from(seller);
            find_covered_call_address(&seller).unwrap() == find_covered_call_address(&seller).unwrap()
        }

        fn distinct_sellers_get_distinct_addresses(
            a: (u64, u64, u64, u64),
            b: (u64, u64, u64, u64)
        ) -> TestResult {
            if a == b {
                return TestResult::discard();
            }
            let (address_a, _) = find_covered_call_address(&pubkey_from(a)).unwrap();
            let (address_b, _) = find_covered_call_address(&pubkey_from(b)).unwrap();
            TestResult::from_bool(address_a != address_b)
        }
    }
}
