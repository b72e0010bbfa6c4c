//! Counter keys: `ip:<hash>` and `fp:<fingerprint>`.

use mula_core::constants::{FINGERPRINT_COUNTER_PREFIX, IP_COUNTER_PREFIX};
use mula_core::models::IpHash;

pub fn ip_key(hash: &IpHash) -> String {
    format!("{IP_COUNTER_PREFIX}:{}", hash.as_str())
}

pub fn fingerprint_key(fingerprint: &str) -> String {
    format!("{FINGERPRINT_COUNTER_PREFIX}:{fingerprint}")
}

/// A parsed counter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKey<'a> {
    Ip(&'a str),
    Fingerprint(&'a str),
}

/// Split a key on its first `:`. Unknown prefixes yield `None`.
pub fn parse_key(key: &str) -> Option<CounterKey<'_>> {
    let (prefix, identity) = key.split_once(':')?;
    match prefix {
        IP_COUNTER_PREFIX => Some(CounterKey::Ip(identity)),
        FINGERPRINT_COUNTER_PREFIX => Some(CounterKey::Fingerprint(identity)),
        _ => None,
    }
}
