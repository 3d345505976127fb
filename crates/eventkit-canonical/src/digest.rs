use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sha1::{Digest as Sha1Digest, Sha1};

use crate::validation::ValidationError;

static SIGNATURE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{40}$").expect("invalid regex"));

/// Supported digest algorithms for event signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-1, 160-bit output. The only algorithm the wire format admits.
    #[serde(rename = "sha-1")]
    Sha1,
}

impl DigestAlg {
    /// Length in characters of a hex-encoded digest for this algorithm.
    pub const fn hex_len(self) -> usize {
        match self {
            DigestAlg::Sha1 => 40,
        }
    }

    /// Hashes `bytes` and returns the raw digest.
    pub fn digest(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            DigestAlg::Sha1 => {
                let mut hasher = Sha1::new();
                hasher.update(bytes);
                hasher.finalize().to_vec()
            }
        }
    }
}

/// Lowercase hex event signature.
///
/// The signature is a keyless checksum over the canonical field
/// concatenation: anyone holding the ten signed fields can recompute it.
/// It detects tampering in transit, it does not prove who produced the event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    /// Digests `bytes` with `alg` and hex-encodes the result.
    pub fn compute(alg: DigestAlg, bytes: &[u8]) -> Self {
        Self(hex::encode(alg.digest(bytes)))
    }

    /// Parses a validated signature (40 lowercase hex characters).
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !SIGNATURE_PATTERN.is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "signature",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Borrowed hex form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison against a claimed signature string.
    pub fn matches(&self, claimed: &str) -> bool {
        self.0 == claimed
    }

    /// Unwraps into the owned hex string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
