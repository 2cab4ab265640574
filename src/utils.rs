use alloy_primitives::Address;
use chrono::{DateTime, Utc};

/// `0x707c...4b43` form of an address for cards and the wallet badge.
pub fn short_address(address: &Address) -> String {
    let full = address.to_checksum(None);
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

pub fn format_date(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%b %e, %Y").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Blocking browser alert; a no-op outside a window.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_short_address() {
        let publisher = address!("707cD5894f028b29a4CD52054C721095Bf3D4b43");
        assert_eq!(short_address(&publisher).to_lowercase(), "0x707c...4b43");
    }

    #[test]
    fn test_format_date() {
        let time = DateTime::from_timestamp(1_700_000_000, 0);
        assert_eq!(format_date(time), "Nov 14, 2023");
        assert_eq!(format_date(None), "unknown");
    }
}
