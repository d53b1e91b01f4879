use serde::Serialize;
use tracing::info;

use crate::error::AuditError;

pub const RECOMMENDATION_EVALUATED: &str = "recommendation.evaluated";
pub const RECOMMENDATION_APPLIED: &str = "recommendation.applied";
pub const NOTE_COMPOSED: &str = "note.composed";

/// A structured audit event for a clinical action: one per evaluation,
/// applied recommendation, and composed note.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            actor: actor.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach any serializable value as the event details.
    pub fn with_serialized_details<T: Serialize>(self, details: &T) -> Result<Self, AuditError> {
        Ok(self.with_details(serde_json::to_value(details)?))
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(serde_json::Value::to_string)
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.actor = %self.actor,
            audit.details = %details,
            "audit event"
        );
    }
}
