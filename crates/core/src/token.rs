//! Opaque record identifiers.

use rand::Rng;

use crate::constants::TOKEN_LEN;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a short random base-36 token.
///
/// Tokens are opaque identifiers, not UUIDs: collisions are improbable at this
/// system's scale and accepted as a non-goal.
pub fn opaque_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..TOKEN_ALPHABET.len());
            TOKEN_ALPHABET[idx] as char
        })
        .collect()
}
