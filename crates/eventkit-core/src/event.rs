use std::borrow::Cow;
use std::cell::OnceCell;
use std::str::FromStr;

use eventkit_canonical::{coerce, Signature, SignedFields};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::integrity;
use crate::labels::Coordinates;

/// Signed unit of business intent.
///
/// Fields are public so producers can fill them before signing. Once
/// `sign` is set the record is meant to stay untouched: any change to the
/// ten signed fields makes [`EventRecord::verify_sign`] return `false`.
///
/// The raw wire form is memoized in a `OnceCell`, so the record is not
/// `Sync`; share it across threads only behind the caller's own lock.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    /// Event identifier.
    pub id: String,
    /// Project code.
    pub project: String,
    /// Schema version label.
    pub version: String,
    /// Context code.
    pub context: String,
    /// Entity code.
    pub entity: String,
    /// Event code.
    pub event: String,
    /// Origin channel.
    pub source: String,
    /// Opaque serialized parameters.
    pub params: String,
    /// Access token presented by the producer.
    #[serde(rename = "accessToken")]
    pub access_token: String,
    /// Creation time in epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    /// Lowercase hex signature; empty until signed.
    pub sign: String,
    #[serde(skip)]
    raw: OnceCell<Vec<u8>>,
}

impl EventRecord {
    /// Starts a field-by-field builder.
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    /// Strictly parses a JSON record and keeps `bytes` verbatim as the raw form.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Deserialization`] if `bytes` is not a JSON object
    /// with correctly typed fields. No partial record is produced.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let mut record: EventRecord = serde_json::from_slice(bytes)?;
        record.raw = OnceCell::from(bytes.to_vec());
        Ok(record)
    }

    /// Builds a record from a loosely typed map. Never fails: missing or
    /// unusable keys become `""` or `0`.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            id: coerce::to_string(map.get("id")),
            project: coerce::to_string(map.get("project")),
            version: coerce::to_string(map.get("version")),
            context: coerce::to_string(map.get("context")),
            entity: coerce::to_string(map.get("entity")),
            event: coerce::to_string(map.get("event")),
            source: coerce::to_string(map.get("source")),
            params: coerce::to_string(map.get("params")),
            access_token: coerce::to_string(map.get("accessToken")),
            created_at: coerce::to_i64(map.get("createdAt")),
            sign: coerce::to_string(map.get("sign")),
            raw: OnceCell::new(),
        }
    }

    /// The ten fields covered by the signature, in signing order.
    pub fn signed_fields(&self) -> SignedFields<'_> {
        SignedFields {
            id: &self.id,
            project: &self.project,
            version: &self.version,
            context: &self.context,
            entity: &self.entity,
            event: &self.event,
            source: &self.source,
            params: &self.params,
            access_token: &self.access_token,
            created_at: self.created_at,
        }
    }

    /// Label coordinates borrowed from this record.
    pub fn coordinates(&self) -> Coordinates<'_> {
        Coordinates {
            project: &self.project,
            context: &self.context,
            entity: &self.entity,
            event: &self.event,
            version: &self.version,
        }
    }

    /// True until the record has been signed.
    pub fn is_empty(&self) -> bool {
        self.sign.is_empty()
    }

    /// Computes and stores the signature over the current fields.
    pub fn generate_sign(&mut self) {
        integrity::generate_sign(Some(self));
    }

    /// Fail-closed signature check against the current fields.
    pub fn verify_sign(&self) -> bool {
        integrity::verify_sign(Some(self))
    }

    /// Stored signature, validated as 40 lowercase hex characters.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSignature`] when `sign` is empty or
    /// malformed.
    pub fn signature(&self) -> Result<Signature, CoreError> {
        Ok(Signature::parse(self.sign.as_str())?)
    }

    /// Raw wire form.
    ///
    /// Returns the bytes this record was parsed from, or serializes the
    /// fields on first call and keeps the result. The cache does not follow
    /// later mutation; rebuild the record instead of relying on it.
    pub fn raw(&self) -> &[u8] {
        self.raw.get_or_init(|| serde_json::to_vec(self).unwrap_or_default())
    }

    /// [`EventRecord::raw`] as text.
    pub fn raw_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.raw())
    }

    /// Serializes the live field values, ignoring the raw cache.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Serialization`] if serde fails.
    pub fn to_json_string(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    /// `project.context.entity->event`
    pub fn full_name(&self) -> String {
        self.coordinates().full_name()
    }

    /// `project.context.entity->event@version`
    pub fn unique_name(&self) -> String {
        self.coordinates().unique_name()
    }

    /// `/project/context/entity`
    pub fn entity_url(&self) -> String {
        self.coordinates().entity_url()
    }

    /// `project.context.entity`
    pub fn entity_name(&self) -> String {
        self.coordinates().entity_name()
    }

    /// `project.context.entity@version`
    pub fn versioned_entity_name(&self) -> String {
        self.coordinates().versioned_entity_name()
    }

    /// `context_entity`
    pub fn table_name(&self) -> String {
        self.coordinates().table_name()
    }
}

/// Copies every field from `id` through `sign`. The raw cache is left
/// behind, so the clone serializes its own wire form when first asked.
impl Clone for EventRecord {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            project: self.project.clone(),
            version: self.version.clone(),
            context: self.context.clone(),
            entity: self.entity.clone(),
            event: self.event.clone(),
            source: self.source.clone(),
            params: self.params.clone(),
            access_token: self.access_token.clone(),
            created_at: self.created_at,
            sign: self.sign.clone(),
            raw: OnceCell::new(),
        }
    }
}

impl PartialEq for EventRecord {
    fn eq(&self, other: &Self) -> bool {
        self.signed_fields() == other.signed_fields() && self.sign == other.sign
    }
}

impl Eq for EventRecord {}

impl FromStr for EventRecord {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for EventRecord {
    type Error = CoreError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl From<&Map<String, Value>> for EventRecord {
    fn from(map: &Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

/// Field-by-field construction of an [`EventRecord`].
#[derive(Debug, Default)]
pub struct EventBuilder {
    record: EventRecord,
}

macro_rules! string_setter {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        pub fn $name(mut self, value: impl Into<String>) -> Self {
            self.record.$name = value.into();
            self
        }
    };
}

impl EventBuilder {
    string_setter!(id, "Sets the event identifier.");
    string_setter!(project, "Sets the project code.");
    string_setter!(version, "Sets the schema version label.");
    string_setter!(context, "Sets the context code.");
    string_setter!(entity, "Sets the entity code.");
    string_setter!(event, "Sets the event code.");
    string_setter!(source, "Sets the origin channel.");
    string_setter!(params, "Sets the serialized parameters.");
    string_setter!(access_token, "Sets the access token.");

    /// Sets the creation time in epoch milliseconds.
    pub fn created_at(mut self, millis: i64) -> Self {
        self.record.created_at = millis;
        self
    }

    /// Stamps the creation time from the wall clock.
    pub fn created_now(self) -> Self {
        self.created_at(crate::time::now_millis())
    }

    /// Serializes `params` as JSON into the params field.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Serialization`] if `params` cannot be encoded.
    pub fn params_json<T: Serialize>(mut self, params: &T) -> Result<Self, CoreError> {
        self.record.params =
            serde_json::to_string(params).map_err(|e| CoreError::Serialization(e.to_string()))?;
        Ok(self)
    }

    /// Finishes without signing.
    pub fn build(self) -> EventRecord {
        self.record
    }

    /// Finishes and signs.
    pub fn build_signed(self) -> EventRecord {
        let mut record = self.record;
        record.generate_sign();
        record
    }
}

/// A record that may be absent.
///
/// Every read is total: an absent record reports empty strings, zero, an
/// empty raw form and a failed verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaybeEvent<'a>(Option<&'a EventRecord>);

macro_rules! string_getter {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        pub fn $name(&self) -> &'a str {
            self.0.map_or("", |e| e.$name.as_str())
        }
    };
}

impl<'a> MaybeEvent<'a> {
    /// Wraps an optional record.
    pub fn new(event: Option<&'a EventRecord>) -> Self {
        Self(event)
    }

    /// The wrapped record, if any.
    pub fn get(&self) -> Option<&'a EventRecord> {
        self.0
    }

    /// Whether a record is present.
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// True when absent or unsigned.
    pub fn is_empty(&self) -> bool {
        self.0.map_or(true, EventRecord::is_empty)
    }

    /// Fail-closed verification.
    pub fn verify_sign(&self) -> bool {
        integrity::verify_sign(self.0)
    }

    /// Raw wire form, empty when absent.
    pub fn raw(&self) -> &'a [u8] {
        self.0.map(EventRecord::raw).unwrap_or_default()
    }

    /// Independent copy of the record, if present.
    pub fn to_record(&self) -> Option<EventRecord> {
        self.0.cloned()
    }

    string_getter!(id, "Event identifier, empty when absent.");
    string_getter!(project, "Project code, empty when absent.");
    string_getter!(version, "Schema version label, empty when absent.");
    string_getter!(context, "Context code, empty when absent.");
    string_getter!(entity, "Entity code, empty when absent.");
    string_getter!(event, "Event code, empty when absent.");
    string_getter!(source, "Origin channel, empty when absent.");
    string_getter!(params, "Serialized parameters, empty when absent.");
    string_getter!(access_token, "Access token, empty when absent.");
    string_getter!(sign, "Stored signature, empty when absent.");

    /// Creation time, zero when absent.
    pub fn created_at(&self) -> i64 {
        self.0.map_or(0, |e| e.created_at)
    }

    /// `project.context.entity->event`, empty when absent.
    pub fn full_name(&self) -> String {
        self.label(Coordinates::full_name)
    }

    /// `project.context.entity->event@version`, empty when absent.
    pub fn unique_name(&self) -> String {
        self.label(Coordinates::unique_name)
    }

    /// `/project/context/entity`, empty when absent.
    pub fn entity_url(&self) -> String {
        self.label(Coordinates::entity_url)
    }

    /// `project.context.entity`, empty when absent.
    pub fn entity_name(&self) -> String {
        self.label(Coordinates::entity_name)
    }

    /// `project.context.entity@version`, empty when absent.
    pub fn versioned_entity_name(&self) -> String {
        self.label(Coordinates::versioned_entity_name)
    }

    /// `context_entity`, empty when absent.
    pub fn table_name(&self) -> String {
        self.label(Coordinates::table_name)
    }

    fn label(&self, f: impl FnOnce(&Coordinates<'a>) -> String) -> String {
        self.0.map(|e| f(&e.coordinates())).unwrap_or_default()
    }
}

impl<'a> From<Option<&'a EventRecord>> for MaybeEvent<'a> {
    fn from(event: Option<&'a EventRecord>) -> Self {
        Self(event)
    }
}

impl<'a> From<&'a EventRecord> for MaybeEvent<'a> {
    fn from(event: &'a EventRecord) -> Self {
        Self(Some(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_parse_fails_on_malformed_json() {
        assert!(matches!(
            EventRecord::from_str("{\"id\": \"x\""),
            Err(CoreError::Deserialization(_))
        ));
        assert!(EventRecord::from_str(r#"{"createdAt": "soon"}"#).is_err());
    }

    #[test]
    fn strict_parse_ignores_unknown_and_defaults_missing() {
        let record = EventRecord::from_str(r#"{"id":"a","extra":true}"#).unwrap();
        assert_eq!(record.id, "a");
        assert_eq!(record.created_at, 0);
        assert!(record.is_empty());
    }

    #[test]
    fn serialization_uses_wire_field_names() {
        let record = EventRecord::builder()
            .id("e1")
            .access_token("t")
            .created_at(5)
            .build();
        let value: Value = serde_json::from_str(&record.to_json_string().unwrap()).unwrap();
        assert_eq!(value["accessToken"], json!("t"));
        assert_eq!(value["createdAt"], json!(5));
        assert_eq!(value["sign"], json!(""));
    }

    #[test]
    fn map_construction_coerces_each_field() {
        let map = json!({
            "id": 17,
            "project": "sys",
            "createdAt": "1700000000000",
            "params": {"nested": true},
        });
        let record = EventRecord::from_map(map.as_object().unwrap());
        assert_eq!(record.id, "17");
        assert_eq!(record.project, "sys");
        assert_eq!(record.created_at, 1_700_000_000_000);
        assert_eq!(record.params, "");
    }

    #[test]
    fn raw_memoizes_first_serialization() {
        let mut record = EventRecord::builder().id("before").build();
        let first = record.raw().to_vec();
        record.id = "after".into();
        assert_eq!(record.raw(), first.as_slice());
        assert!(record.to_json_string().unwrap().contains("after"));
    }

    #[test]
    fn maybe_event_is_total_when_absent() {
        let absent = MaybeEvent::new(None);
        assert!(absent.is_empty());
        assert!(!absent.verify_sign());
        assert!(absent.raw().is_empty());
        assert_eq!(absent.full_name(), "");
        assert_eq!(absent.unique_name(), "");
        assert_eq!(absent.entity_url(), "");
        assert_eq!(absent.table_name(), "");
        assert_eq!(absent.created_at(), 0);
        assert!(absent.to_record().is_none());
        for field in [
            absent.id(),
            absent.project(),
            absent.version(),
            absent.context(),
            absent.entity(),
            absent.event(),
            absent.source(),
            absent.params(),
            absent.access_token(),
            absent.sign(),
        ] {
            assert_eq!(field, "");
        }
    }

    #[test]
    fn maybe_event_reads_present_fields() {
        let record = EventRecord::builder()
            .id("evt-7")
            .project("sys")
            .version("0.1.0")
            .context("user")
            .entity("avatar")
            .event("update")
            .source("web")
            .params("{}")
            .access_token("tok")
            .created_at(5)
            .build_signed();
        let view = MaybeEvent::from(&record);
        assert_eq!(view.id(), "evt-7");
        assert_eq!(view.project(), "sys");
        assert_eq!(view.version(), "0.1.0");
        assert_eq!(view.context(), "user");
        assert_eq!(view.entity(), "avatar");
        assert_eq!(view.event(), "update");
        assert_eq!(view.source(), "web");
        assert_eq!(view.params(), "{}");
        assert_eq!(view.access_token(), "tok");
        assert_eq!(view.sign(), record.sign);
        assert_eq!(view.created_at(), 5);
        assert!(view.verify_sign());
    }
}
