use eventkit_canonical::Canonicalizer;
use tracing::{debug, warn};

use crate::entity::EntityRecord;
use crate::errors::{CoreError, GateRejection};
use crate::event::EventRecord;
use crate::role::{Role, Tier};
use crate::version::VersionRecord;

/// Admission check run before an event executes against an entity.
///
/// Checks, in order: signature, caller tier, entity liveness and code,
/// version ownership, label and online flag. The first failure wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionGate {
    canonicalizer: Canonicalizer,
}

impl ExecutionGate {
    /// Creates a gate verifying signatures with `canonicalizer`.
    pub fn new(canonicalizer: Canonicalizer) -> Self {
        Self { canonicalizer }
    }

    /// Admits or rejects `event` for a caller holding `role`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Rejected`] with the first failed check.
    pub fn check(
        &self,
        role: Role,
        required: Tier,
        event: &EventRecord,
        entity: &EntityRecord,
        version: &VersionRecord,
    ) -> Result<(), CoreError> {
        match self.first_rejection(role, required, event, entity, version) {
            None => {
                debug!(event = %event.unique_name(), %role, "event admitted");
                Ok(())
            }
            Some(rejection) => {
                warn!(
                    event_id = %event.id,
                    event = %event.unique_name(),
                    %role,
                    reason = %rejection,
                    "event rejected"
                );
                Err(rejection.into())
            }
        }
    }

    fn first_rejection(
        &self,
        role: Role,
        required: Tier,
        event: &EventRecord,
        entity: &EntityRecord,
        version: &VersionRecord,
    ) -> Option<GateRejection> {
        if !self.canonicalizer.verify(&event.signed_fields(), &event.sign) {
            return Some(GateRejection::BadSignature);
        }
        if !role.satisfies(required) {
            return Some(GateRejection::Forbidden { role, required });
        }
        if entity.is_deleted() {
            return Some(GateRejection::EntityDeleted {
                code: entity.code.clone(),
            });
        }
        if entity.code != event.entity {
            return Some(GateRejection::EntityMismatch {
                event: event.entity.clone(),
                entity: entity.code.clone(),
            });
        }
        if version.project != event.project {
            return Some(GateRejection::ProjectMismatch {
                event: event.project.clone(),
                version: version.project.clone(),
            });
        }
        if !version.matches_label(&event.version) {
            return Some(GateRejection::VersionMismatch {
                event: event.version.clone(),
                version: version.label(),
            });
        }
        if !version.online {
            return Some(GateRejection::VersionOffline {
                label: version.label(),
            });
        }
        None
    }
}
