//! Process-wide signing secret
//!
//! Loaded once at startup (from hex configuration or generated for tests)
//! and handed to the codec explicitly. Zeroized on drop.

use campus_core::{CampusError, Result};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of the signing secret in bytes
pub const SECRET_LEN: usize = 32;

/// The HMAC key used to sign and verify session tokens
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningSecret([u8; SECRET_LEN]);

impl SigningSecret {
    /// Wrap raw key bytes
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex string, as carried in configuration
    pub fn from_hex(s: &str) -> Result<Self> {
        let raw = hex::decode(s)
            .map_err(|_| CampusError::invalid("signing secret is not valid hex"))?;
        let bytes: [u8; SECRET_LEN] = raw
            .try_into()
            .map_err(|_| CampusError::invalid("signing secret must be 32 bytes"))?;
        Ok(Self(bytes))
    }

    /// Generate a fresh random secret
    pub fn generate() -> Self {
        let mut bytes = [0u8; SECRET_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Key material, for the codec only
    pub(crate) fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material never appears in logs or debug output
        f.write_str("SigningSecret(..)")
    }
}
