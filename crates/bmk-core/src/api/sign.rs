//! HMAC-SHA512 signing of private API payloads.

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// MAC of `payload` under `secret`, as lowercase hex. Sent as the
/// `API-Hash` header next to the url-encoded command payload.
pub fn hmac_sha512_hex(secret: &str, payload: &str) -> String {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA512 accepts keys of any length");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 1: 20 bytes of 0x0b, "Hi There".
    #[test]
    fn rfc4231_case_1() {
        let key = "\x0b".repeat(20);
        assert_eq!(
            hmac_sha512_hex(&key, "Hi There"),
            "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
             daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
        );
    }

    // RFC 4231 test case 2: key "Jefe".
    #[test]
    fn rfc4231_case_2() {
        assert_eq!(
            hmac_sha512_hex("Jefe", "what do ya want for nothing?"),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn digest_is_128_hex_chars() {
        let mac = hmac_sha512_hex("secret", "method=info&tonce=1");
        assert_eq!(mac.len(), 128);
        assert!(mac.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
