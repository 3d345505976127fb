use std::fmt;

use crate::digest::{DigestAlg, Signature};

/// Borrowed view of the ten fields covered by an event signature.
///
/// Field order here is the concatenation order. `access_token` and
/// `created_at` are signed even though they are not part of any label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignedFields<'a> {
    /// Event identifier.
    pub id: &'a str,
    /// Project code.
    pub project: &'a str,
    /// Schema version label.
    pub version: &'a str,
    /// Context code.
    pub context: &'a str,
    /// Entity code.
    pub entity: &'a str,
    /// Event code.
    pub event: &'a str,
    /// Origin channel.
    pub source: &'a str,
    /// Opaque serialized parameters.
    pub params: &'a str,
    /// Access token presented by the producer.
    pub access_token: &'a str,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

impl SignedFields<'_> {
    /// Concatenates the fields with no separator. `created_at` is rendered
    /// in base 10 with a leading `-` when negative.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for SignedFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}{}{}{}{}",
            self.id,
            self.project,
            self.version,
            self.context,
            self.entity,
            self.event,
            self.source,
            self.params,
            self.access_token,
            self.created_at
        )
    }
}

/// Result of canonicalization.
#[derive(Debug)]
pub struct CanonicalizationResult {
    /// Canonical bytes fed to the digest.
    pub bytes: Vec<u8>,
    /// Hex digest of `bytes`.
    pub signature: Signature,
}

/// Canonicalizer that turns signed fields into a signature.
#[derive(Debug, Clone, Copy)]
pub struct Canonicalizer {
    alg: DigestAlg,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(DigestAlg::Sha1)
    }
}

impl Canonicalizer {
    /// Creates a canonicalizer digesting with `alg`.
    pub fn new(alg: DigestAlg) -> Self {
        Self { alg }
    }

    /// Digest algorithm in use.
    pub fn alg(&self) -> DigestAlg {
        self.alg
    }

    /// Produces canonical bytes together with their signature.
    pub fn canonicalize(&self, fields: &SignedFields<'_>) -> CanonicalizationResult {
        let bytes = fields.canonical_bytes();
        let signature = Signature::compute(self.alg, &bytes);
        CanonicalizationResult { bytes, signature }
    }

    /// Signature over `fields`, discarding the intermediate bytes.
    pub fn sign(&self, fields: &SignedFields<'_>) -> Signature {
        Signature::compute(self.alg, &fields.canonical_bytes())
    }

    /// Fail-closed check of a claimed signature.
    ///
    /// An empty claim never verifies. Otherwise the digest is recomputed and
    /// compared exactly, hex case included.
    pub fn verify(&self, fields: &SignedFields<'_>, claimed: &str) -> bool {
        if claimed.is_empty() {
            return false;
        }
        self.sign(fields).matches(claimed)
    }
}
