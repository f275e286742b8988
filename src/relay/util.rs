//! Usage: Small shared helpers (unix time, trace ids).

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TRACE_COUNTER: AtomicU64 = AtomicU64::new(0);

pub(super) fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn now_unix_nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
}

/// Process-unique 32-hex trace id derived from (timestamp, counter, pid).
pub(super) fn new_trace_id() -> String {
    let seq = TRACE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let pid = std::process::id() as u64;

    let mut seed: Vec<u8> = Vec::with_capacity(32);
    seed.extend_from_slice(&now_unix_nanos().to_be_bytes());
    seed.extend_from_slice(&seq.to_be_bytes());
    seed.extend_from_slice(&pid.to_be_bytes());
    let digest = Sha256::digest(seed);

    digest[..16].iter().map(|b| format!("{b:02x}")).collect()
}
