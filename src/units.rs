use crate::error::{CrowdfundError, CrowdfundResult};
use alloy_primitives::U256;

/// Decimal places of ether.
pub const ETHER_DECIMALS: u8 = 18;

/// Keystroke filter for amount fields: digits with at most one `.`, empty allowed.
pub fn is_amount_input(value: &str) -> bool {
    let mut seen_dot = false;
    value.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Split an amount into integral and fractional digits. Trailing zeros of the
/// fraction are dropped and an empty integral part reads as `0`.
fn split_amount(amount: &str) -> CrowdfundResult<(&str, &str)> {
    if !is_amount_input(amount) || !amount.bytes().any(|b| b.is_ascii_digit()) {
        return Err(CrowdfundError::InvalidAmount(amount.to_string()));
    }

    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    let whole = if whole.is_empty() { "0" } else { whole };
    Ok((whole, fraction.trim_end_matches('0')))
}

fn scale(amount: &str, whole: &str, fraction: &str, decimals: u8) -> CrowdfundResult<U256> {
    let width = decimals as usize;
    let mut digits = String::with_capacity(whole.len() + width);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat('0').take(width - fraction.len()));

    U256::from_str_radix(&digits, 10)
        .map_err(|e| CrowdfundError::InvalidAmount(format!("{}: {}", amount, e)))
}

/// Convert a decimal amount into an integer with `decimals` implicit places.
///
/// Fails with [`CrowdfundError::ExcessPrecision`] when the amount carries more
/// significant fractional digits than `decimals`.
pub fn parse_units(amount: &str, decimals: u8) -> CrowdfundResult<U256> {
    let (whole, fraction) = split_amount(amount)?;
    if fraction.len() > decimals as usize {
        return Err(CrowdfundError::ExcessPrecision {
            digits: fraction.len(),
            max: decimals,
        });
    }
    scale(amount, whole, fraction, decimals)
}

/// Ether amount to wei.
pub fn parse_ether(amount: &str) -> CrowdfundResult<U256> {
    parse_units(amount, ETHER_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(digits: &str) -> U256 {
        U256::from_str_radix(digits, 10).unwrap()
    }

    fn one_ether() -> U256 {
        U256::from(10u64).pow(U256::from(18u64))
    }

    #[test]
    fn test_fraction_is_right_padded() {
        assert_eq!(parse_ether("1.5").unwrap(), wei("1500000000000000000"));
        assert_eq!(parse_ether("0.000000000000000001").unwrap(), U256::from(1u64));
        assert_eq!(parse_ether("12.345").unwrap(), wei("12345000000000000000"));
    }

    #[test]
    fn test_whole_amounts_scale_by_ten_to_eighteen() {
        assert_eq!(parse_ether("2").unwrap(), wei("2000000000000000000"));
        for n in [0u64, 1, 10, 100, 4200] {
            assert_eq!(
                parse_ether(&n.to_string()).unwrap(),
                U256::from(n) * one_ether(),
                "amount {}",
                n
            );
        }
    }

    #[test]
    fn test_trailing_zeros_do_not_change_the_result() {
        assert_eq!(parse_ether("1.50").unwrap(), parse_ether("1.5").unwrap());
        assert_eq!(parse_ether("3.000").unwrap(), parse_ether("3").unwrap());
        assert_eq!(parse_ether("5.").unwrap(), parse_ether("5").unwrap());
        // Zeros in the integral part are significant.
        assert_eq!(parse_ether("10").unwrap(), U256::from(10u64) * one_ether());
    }

    #[test]
    fn test_missing_whole_part_reads_as_zero() {
        assert_eq!(parse_ether(".5").unwrap(), wei("500000000000000000"));
    }

    #[test]
    fn test_malformed_amounts_are_rejected() {
        for bad in ["", ".", "abc", "1.2.3", "-1", "1e18", " 1", "1,5"] {
            assert!(
                matches!(parse_ether(bad), Err(CrowdfundError::InvalidAmount(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_excess_precision() {
        let amount = "0.0000000000000000015";
        assert_eq!(
            parse_ether(amount),
            Err(CrowdfundError::ExcessPrecision { digits: 19, max: 18 })
        );
        // Zeros past the eighteenth place are not precision.
        assert_eq!(parse_ether("1.0000000000000000000000").unwrap(), one_ether());
    }

    #[test]
    fn test_overflow_is_invalid() {
        let huge = "9".repeat(80);
        assert!(matches!(parse_ether(&huge), Err(CrowdfundError::InvalidAmount(_))));
    }

    #[test]
    fn test_other_scales() {
        assert_eq!(parse_units("1.25", 6).unwrap(), U256::from(1_250_000u64));
        assert_eq!(parse_units("7", 0).unwrap(), U256::from(7u64));
    }

    #[test]
    fn test_amount_input_filter() {
        assert!(is_amount_input(""));
        assert!(is_amount_input("1."));
        assert!(is_amount_input(".25"));
        assert!(!is_amount_input("1..2"));
        assert!(!is_amount_input("1a"));
    }
}
