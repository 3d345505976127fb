//! Event, entity and version records for eventkit.
//!
//! This crate provides:
//! - `EventRecord`, the signed unit of business intent, with strict and
//!   lenient construction and a memoized raw wire form
//! - Signature generation and fail-closed verification
//! - Canonical labels (`project.context.entity->event@version` and friends)
//! - `EntityRecord` and `VersionRecord` descriptors
//! - `Role` tiers and the operating `Mode` flag
//! - `ExecutionGate`, which combines the above before an event may run
//!
//! Core invariants:
//! - The signature is a keyless SHA-1 over ten fields in fixed order; it
//!   detects tampering, it does not authenticate the producer
//! - Labels are recomputed from fields on every call
//! - Read-side operations on an absent record return empty values
//!
#![deny(missing_docs)]

/// Entity descriptors.
pub mod entity;
/// Error types for core operations.
pub mod errors;
/// Event record, builder and absent-tolerant view.
pub mod event;
/// Execution gate combining signature, role and record checks.
pub mod gate;
/// Signature generation and verification.
pub mod integrity;
/// Composite label formatting.
pub mod labels;
/// Operating mode flag.
pub mod mode;
/// Role ranks and tier predicates.
pub mod role;
/// Wall-clock helpers.
pub mod time;
/// Version descriptors.
pub mod version;

pub use entity::{BusinessRules, EntityRecord};
pub use errors::{CoreError, GateRejection};
pub use event::{EventBuilder, EventRecord, MaybeEvent};
pub use gate::ExecutionGate;
pub use integrity::{generate_sign, verify_sign};
pub use labels::Coordinates;
pub use mode::{is_prod_mode, Mode};
pub use role::{Role, Tier};
pub use version::{VersionPart, VersionRecord};
