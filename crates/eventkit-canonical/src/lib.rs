//! Canonical signing primitives for eventkit records.
//!
//! Every byte that participates in an event signature is produced by this
//! crate: the fixed-order field concatenation, the SHA-1 digest over it and
//! the lowercase hex encoding stored on the wire. The lenient value coercion
//! used by map-based record construction also lives here so that every crate
//! degrades loosely-typed input the same way.
//!
#![deny(missing_docs)]

/// Fixed-order concatenation of the signed event fields.
pub mod canonicalizer;
/// Coerce-or-default conversions from loosely typed JSON values.
pub mod coerce;
/// Digest algorithm and hex signature newtype.
pub mod digest;
/// Validation helpers used by canonical types.
pub mod validation;

pub use canonicalizer::{CanonicalizationResult, Canonicalizer, SignedFields};
pub use digest::{DigestAlg, Signature};
pub use validation::ValidationError;
