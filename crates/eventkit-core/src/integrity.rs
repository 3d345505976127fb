//! Event signing and verification.
//!
//! Signature: `hex(sha1(id || project || version || context || entity ||
//! event || source || params || accessToken || decimal(createdAt)))`
//!
//! There is no key. Any party holding the ten fields can produce a valid
//! signature, so a verified event proves its fields were not altered after
//! signing, nothing about who signed it.

use eventkit_canonical::{Canonicalizer, Signature};
use tracing::{debug, trace};

use crate::event::EventRecord;

/// Signature over the record's current fields.
pub fn compute_sign(event: &EventRecord) -> Signature {
    Canonicalizer::default().sign(&event.signed_fields())
}

/// Stores the signature over the current fields. Does nothing for `None`.
pub fn generate_sign(event: Option<&mut EventRecord>) {
    let Some(event) = event else {
        return;
    };
    event.sign = compute_sign(event).into_string();
    trace!(event_id = %event.id, sign = %event.sign, "event signed");
}

/// Fail-closed verification.
///
/// Returns `false` for an absent record or an empty signature; otherwise
/// recomputes the digest and compares it to `sign` exactly, hex case
/// included. A `false` result means reject the event, not retry.
pub fn verify_sign(event: Option<&EventRecord>) -> bool {
    let Some(event) = event else {
        return false;
    };
    if event.sign.is_empty() {
        debug!(event_id = %event.id, "event is unsigned");
        return false;
    }
    let ok = Canonicalizer::default().verify(&event.signed_fields(), &event.sign);
    if !ok {
        debug!(
            event_id = %event.id,
            event = %event.unique_name(),
            "event signature mismatch"
        );
    }
    ok
}
