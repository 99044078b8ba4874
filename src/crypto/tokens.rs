//! Salt and confirmation token generation

use base64::{Engine as _, engine::general_purpose};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Number of random bytes drawn for a confirmation token
pub const TOKEN_SIZE_BYTES: usize = 16;

/// Conventional salt size in bytes
pub const SALT_SIZE_BYTES: usize = 16;

/// Generate a URL-safe confirmation token from the OS random source
///
/// The token is later compared byte-for-byte by the confirmation
/// matcher, so the encoding here (URL-safe base64, padding kept) is the
/// canonical form.
pub fn generate_confirmation_token() -> String {
    generate_confirmation_token_with(&mut OsRng)
}

/// Generate a URL-safe confirmation token from the given random source
///
/// Draws [`TOKEN_SIZE_BYTES`] bytes and encodes them with URL-safe
/// base64 (`+` becomes `-`, `/` becomes `_`, `=` padding preserved).
/// The source must be cryptographically secure; it is a parameter so
/// tests can supply a deterministic one.
pub fn generate_confirmation_token_with<R>(rng: &mut R) -> String
where
    R: RngCore + CryptoRng,
{
    let mut bytes = [0u8; TOKEN_SIZE_BYTES];
    rng.fill_bytes(&mut bytes);
    general_purpose::URL_SAFE.encode(bytes)
}

/// Generate a random salt of the requested byte length, base64-encoded
///
/// [`SALT_SIZE_BYTES`] is the conventional length. Always draws from
/// the OS random source.
pub fn generate_salt(byte_length: usize) -> String {
    let mut bytes = vec![0u8; byte_length];
    OsRng.fill_bytes(&mut bytes);
    general_purpose::STANDARD.encode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng {
        bytes: Vec<u8>,
        position: usize,
    }

    impl FixedRng {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: bytes.to_vec(),
                position: 0,
            }
        }
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_le_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest.iter_mut() {
                *byte = self.bytes[self.position % self.bytes.len()];
                self.position += 1;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for FixedRng {}

    // ==================== generate_confirmation_token Tests ====================

    #[test]
    fn test_token_from_fixed_bytes_is_reproducible() {
        let mut rng = FixedRng::new(&[
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ]);

        let token = generate_confirmation_token_with(&mut rng);
        assert_eq!(token, "AAECAwQFBgcICQoLDA0ODw==");
    }

    #[test]
    fn test_token_substitutes_url_unsafe_characters() {
        // Standard base64 of these bytes is "++++ASNFZ4mrze/+3LqYdg=="
        let mut rng = FixedRng::new(&[
            0xfb, 0xef, 0xbe, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba,
            0x98, 0x76,
        ]);

        let token = generate_confirmation_token_with(&mut rng);
        assert_eq!(token, "----ASNFZ4mrze_-3LqYdg==");
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(token.ends_with("=="));
    }

    #[test]
    fn test_token_length() {
        // 16 bytes encode to 24 base64 characters
        let token = generate_confirmation_token();
        assert_eq!(token.len(), 24);
    }

    #[test]
    fn test_token_uniqueness() {
        let token1 = generate_confirmation_token();
        let token2 = generate_confirmation_token();
        assert_ne!(token1, token2);
    }

    // ==================== generate_salt Tests ====================

    #[test]
    fn test_generate_salt_encoded_length() {
        assert_eq!(generate_salt(16).len(), 24);
        assert_eq!(generate_salt(20).len(), 28);
    }

    #[test]
    fn test_generate_salt_round_trips_requested_length() {
        let salt = generate_salt(16);
        let decoded = general_purpose::STANDARD.decode(salt).unwrap();
        assert_eq!(decoded.len(), 16);
    }

    #[test]
    fn test_generate_salt_uniqueness() {
        let salt1 = generate_salt(16);
        let salt2 = generate_salt(16);
        assert_ne!(salt1, salt2);
    }

    #[test]
    fn test_generate_salt_zero_length() {
        assert!(generate_salt(0).is_empty());
    }
}
