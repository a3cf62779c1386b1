use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::outcome::FlipOutcome;

// Seeded coin: server_seed (secret) + nonce -> HMAC-SHA256 -> first 4 bytes -> float in [0,1)

pub type HmacSha256 = Hmac<Sha256>;

pub fn derive_hash_hex(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}

pub fn unit_float(bytes: &[u8; 32]) -> f64 {
    let v = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    (v as f64) / (u32::MAX as f64 + 1.0)
}

#[derive(Debug, Clone)]
pub struct CoinRng {
    server_seed: String, // secret
}

impl CoinRng {
    pub fn new(server_seed: impl Into<String>) -> Self {
        Self {
            server_seed: server_seed.into(),
        }
    }

    pub fn server_seed_hash_hex(&self) -> String {
        derive_hash_hex(self.server_seed.as_bytes())
    }

    pub fn hmac_bytes(&self, nonce: u64) -> [u8; 32] {
        // HMAC takes keys of any length
        let mut mac = HmacSha256::new_from_slice(self.server_seed.as_bytes()).expect("HMAC key");
        mac.update(format!("flip:{nonce}").as_bytes());
        let mut out = [0u8; 32];
        out.copy_from_slice(&mac.finalize().into_bytes());
        out
    }

    pub fn outcome(&self, nonce: u64) -> FlipOutcome {
        if unit_float(&self.hmac_bytes(nonce)) < 0.5 {
            FlipOutcome::Heads
        } else {
            FlipOutcome::Tails
        }
    }
}
