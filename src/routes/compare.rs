// IPv4 ordering for route records

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;

use super::Route;

thread_local! {
    // Interface labels in the UI are Russian; ru collation also orders Latin
    static COLLATOR: Option<Collator> = match Collator::try_new(&locale!("ru").into(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!("ru collator unavailable, comparing by code point: {}", e);
            None
        }
    };
}

/// Parse a dotted-quad string into its big-endian `u32` value.
///
/// Exactly four decimal octets are accepted, each made only of ASCII digits
/// and no greater than 255, optionally followed by a `/len` prefix length in
/// 0..=32. The prefix length does not take part in the key. Anything else
/// yields `None`.
pub fn parse_ipv4_key(s: &str) -> Option<u32> {
    let address = match s.split_once('/') {
        Some((address, prefix)) => {
            if prefix.is_empty() || prefix.len() > 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let prefix_len: u8 = prefix.parse().ok()?;
            if prefix_len > 32 {
                return None;
            }
            address
        }
        None => s,
    };

    let mut key: u32 = 0;
    let mut octets = 0;

    for token in address.split('.') {
        if octets == 4 || token.is_empty() || token.len() > 3 {
            return None;
        }
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let octet: u32 = token.parse().ok()?;
        if octet > 255 {
            return None;
        }
        key = (key << 8) | octet;
        octets += 1;
    }

    (octets == 4).then_some(key)
}

/// Compare two dotted-quad addresses numerically.
///
/// When either side is not a well-formed address the pair is compared as
/// plain strings instead.
pub fn compare_addresses(a: &str, b: &str) -> Ordering {
    match (parse_ipv4_key(a), parse_ipv4_key(b)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb),
        _ => a.cmp(b),
    }
}

/// Order routes by destination address, then by prefix length (shorter first).
pub fn compare_address_and_mask(a: &Route, b: &Route) -> Ordering {
    compare_addresses(&a.address, &b.address).then_with(|| a.mask_length.cmp(&b.mask_length))
}

/// Locale-aware comparison used for interface names.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
