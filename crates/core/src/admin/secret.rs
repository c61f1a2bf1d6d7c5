use sha2::{Digest, Sha256};

/// Shared secret that authorizes the censorship toggle.
///
/// Only a SHA-256 digest is kept. Comparing fixed-length digests in constant
/// time accepts exactly the same candidates as plain string equality without
/// leaking the position of the first mismatching byte.
#[derive(Clone)]
pub struct AdminSecret {
    digest: [u8; 32],
}

impl AdminSecret {
    /// Returns `None` for an empty secret, which would otherwise match an
    /// empty password field.
    pub fn new(secret: &str) -> Option<Self> {
        if secret.is_empty() {
            return None;
        }
        Some(Self {
            digest: digest(secret),
        })
    }

    pub fn verify(&self, candidate: &str) -> bool {
        constant_time_eq(&self.digest, &digest(candidate))
    }
}

impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminSecret(**redacted**)")
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

fn constant_time_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_is_exact_equality() {
        let secret = AdminSecret::new("hunter2").unwrap();
        assert!(secret.verify("hunter2"));
        assert!(!secret.verify("hunter"));
        assert!(!secret.verify("hunter22"));
        assert!(!secret.verify("Hunter2"));
        assert!(!secret.verify(" hunter2"));
        assert!(!secret.verify(""));
    }

    #[test]
    fn test_empty_secret_is_not_configured() {
        assert!(AdminSecret::new("").is_none());
    }

    #[test]
    fn test_debug_does_not_leak() {
        let secret = AdminSecret::new("hunter2").unwrap();
        assert!(!format!("{:?}", secret).contains("hunter2"));
    }
}
