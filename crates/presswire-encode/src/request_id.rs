// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Default request-id generation.

use presswire_core::error::{EncodeError, Result};
use ring::rand::{SecureRandom, SystemRandom};

/// Smallest generated request-id.
pub const REQUEST_ID_MIN: i32 = 10_000;

/// Largest generated request-id (inclusive).
pub const REQUEST_ID_MAX: i32 = 99_999;

const SPAN: u32 = (REQUEST_ID_MAX - REQUEST_ID_MIN + 1) as u32;

/// Raw draws at or above this are rejected so every id is equally likely.
const ACCEPT_BELOW: u32 = (u32::MAX / SPAN) * SPAN;

/// Draw a request-id uniformly from `[REQUEST_ID_MIN, REQUEST_ID_MAX]`
/// using the system CSPRNG.
///
/// Fails with [`EncodeError::RandomSource`] only if the OS generator does.
pub fn generate_request_id() -> Result<i32> {
    let rng = SystemRandom::new();
    loop {
        let mut raw = [0u8; 4];
        rng.fill(&mut raw).map_err(|_| EncodeError::RandomSource)?;
        if let Some(id) = map_into_range(u32::from_be_bytes(raw)) {
            return Ok(id);
        }
    }
}

fn map_into_range(raw: u32) -> Option<i32> {
    if raw >= ACCEPT_BELOW {
        return None;
    }
    // SPAN < 2^17, so the remainder always fits
    Some(REQUEST_ID_MIN + (raw % SPAN) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_stay_in_range() {
        for _ in 0..1_000 {
            let id = generate_request_id().expect("system rng");
            assert!((REQUEST_ID_MIN..=REQUEST_ID_MAX).contains(&id), "{id} out of range");
        }
    }

    #[test]
    fn mapping_hits_both_bounds() {
        assert_eq!(map_into_range(0), Some(REQUEST_ID_MIN));
        assert_eq!(map_into_range(SPAN - 1), Some(REQUEST_ID_MAX));
        assert_eq!(map_into_range(SPAN), Some(REQUEST_ID_MIN));
    }

    #[test]
    fn mapping_rejects_biased_tail() {
        assert_eq!(map_into_range(ACCEPT_BELOW), None);
        assert_eq!(map_into_range(u32::MAX), None);
        assert!(map_into_range(ACCEPT_BELOW - 1).is_some());
    }
}
