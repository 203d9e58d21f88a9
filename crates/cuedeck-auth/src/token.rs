//! Session token minting.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;

/// Number of random bytes per token. 32 bytes = 256 bits of entropy.
const TOKEN_BYTES: usize = 32;

/// Mint a fresh session token from the OS-seeded CSPRNG.
///
/// Tokens are opaque, URL-safe strings. Cue ids use UUIDs; session tokens
/// deliberately do not, since a v4 UUID carries only 122 bits of randomness.
pub fn mint_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
