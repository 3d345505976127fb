use thiserror::Error;

use crate::role::{Role, Tier};

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Strict byte/string input was not a valid record.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),
    /// Record could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// Version label is not `major.minor.patch`.
    #[error("invalid version label: {0:?}")]
    InvalidVersionLabel(String),
    /// Version part is already at its maximum.
    #[error("version {0} cannot be bumped further")]
    VersionOverflow(String),
    /// Stored signature is not 40 lowercase hex characters.
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] eventkit_canonical::ValidationError),
    /// Execution gate refused the event.
    #[error("event rejected: {0}")]
    Rejected(#[from] GateRejection),
}

/// Reason an event may not execute. Rejections are terminal for the event
/// instance: the producer has to resubmit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateRejection {
    /// Signature missing or not matching the signed fields.
    #[error("signature does not verify")]
    BadSignature,
    /// Caller's role is not a member of the required tier.
    #[error("role {role} is not {required}")]
    Forbidden {
        /// Caller's role.
        role: Role,
        /// Tier the event requires.
        required: Tier,
    },
    /// Target entity has been soft-deleted.
    #[error("entity {code} is deleted")]
    EntityDeleted {
        /// Entity code.
        code: String,
    },
    /// Event targets a different entity than the one supplied.
    #[error("event targets entity {event} but entity record is {entity}")]
    EntityMismatch {
        /// Entity code carried by the event.
        event: String,
        /// Code of the entity record.
        entity: String,
    },
    /// Version record belongs to another project.
    #[error("event project {event} does not own version of project {version}")]
    ProjectMismatch {
        /// Project carried by the event.
        event: String,
        /// Project of the version record.
        version: String,
    },
    /// Event was built against another version.
    #[error("event version {event} does not match {version}")]
    VersionMismatch {
        /// Version label carried by the event.
        event: String,
        /// Label of the version record.
        version: String,
    },
    /// Version is not online.
    #[error("version {label} is offline")]
    VersionOffline {
        /// Version label.
        label: String,
    },
}
