use std::cmp::Ordering;
use std::str::FromStr;

use eventkit_canonical::coerce;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// Component of a semantic version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPart {
    /// Breaking release.
    Major,
    /// Feature release.
    Minor,
    /// Fix release.
    Patch,
}

/// Semantic version of a deployed project.
///
/// `locked` and `online` are independent flags. How many versions of a
/// project may be online at once is enforced by the deployment layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionRecord {
    /// Version identifier.
    pub id: i64,
    /// Project code.
    pub project: String,
    /// Frozen against further changes.
    pub locked: bool,
    /// Currently serving events.
    pub online: bool,
    /// Major number.
    pub major: i64,
    /// Minor number.
    pub minor: i64,
    /// Patch number.
    pub patch: i64,
    /// Release note or link to one.
    pub note: String,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    /// Last update time in epoch milliseconds.
    pub updated_at: i64,
    /// Creator.
    pub created_by: String,
}

impl VersionRecord {
    /// Strictly parses a JSON version.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Deserialization`] on malformed input.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Lenient construction from a loosely typed map.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            id: coerce::to_i64(map.get("id")),
            project: coerce::to_string(map.get("project")),
            locked: coerce::to_bool(map.get("locked")),
            online: coerce::to_bool(map.get("online")),
            major: coerce::to_i64(map.get("major")),
            minor: coerce::to_i64(map.get("minor")),
            patch: coerce::to_i64(map.get("patch")),
            note: coerce::to_string(map.get("note")),
            created_at: coerce::to_i64(map.get("createdAt")),
            updated_at: coerce::to_i64(map.get("updatedAt")),
            created_by: coerce::to_string(map.get("createdBy")),
        }
    }

    /// `major.minor.patch`
    pub fn label(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Splits a `major.minor.patch` label.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidVersionLabel`] unless the label is exactly
    /// three dot-separated non-negative decimal integers.
    pub fn parse_label(label: &str) -> Result<(i64, i64, i64), CoreError> {
        let invalid = || CoreError::InvalidVersionLabel(label.to_string());
        let mut parts = label.split('.').map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<i64>().map_err(|_| invalid())
        });
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        Ok((major?, minor?, patch?))
    }

    /// Whether `label` is exactly this version's label. Zero-padded or
    /// otherwise non-canonical spellings do not match.
    pub fn matches_label(&self, label: &str) -> bool {
        self.label() == label
    }

    /// Orders by major, then minor, then patch.
    pub fn cmp_semver(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }

    /// Draft of the next version of the same project: the chosen part is
    /// incremented, lower parts reset, flags cleared.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::VersionOverflow`] when the chosen part is
    /// already `i64::MAX`.
    pub fn bumped(&self, part: VersionPart) -> Result<Self, CoreError> {
        let next = |n: i64| {
            n.checked_add(1)
                .ok_or_else(|| CoreError::VersionOverflow(self.label()))
        };
        let (major, minor, patch) = match part {
            VersionPart::Major => (next(self.major)?, 0, 0),
            VersionPart::Minor => (self.major, next(self.minor)?, 0),
            VersionPart::Patch => (self.major, self.minor, next(self.patch)?),
        };
        Ok(Self {
            project: self.project.clone(),
            major,
            minor,
            patch,
            ..Self::default()
        })
    }
}

impl FromStr for VersionRecord {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl From<&Map<String, Value>> for VersionRecord {
    fn from(map: &Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn version(major: i64, minor: i64, patch: i64) -> VersionRecord {
        VersionRecord {
            project: "sys".into(),
            major,
            minor,
            patch,
            ..VersionRecord::default()
        }
    }

    #[test]
    fn label_is_dot_joined_decimal() {
        assert_eq!(version(0, 1, 0).label(), "0.1.0");
        assert_eq!(version(10, 0, 12).label(), "10.0.12");
    }

    #[test]
    fn parse_label_requires_three_numeric_parts() {
        assert_eq!(VersionRecord::parse_label("1.2.3").unwrap(), (1, 2, 3));
        assert!(VersionRecord::parse_label("1.2").is_err());
        assert!(VersionRecord::parse_label("1.2.3.4").is_err());
        assert!(VersionRecord::parse_label("1.-2.3").is_err());
        assert!(VersionRecord::parse_label("1..3").is_err());
        assert!(VersionRecord::parse_label("v1.2.3").is_err());
    }

    #[test]
    fn ordering_is_numeric_not_lexical() {
        assert_eq!(version(0, 10, 0).cmp_semver(&version(0, 9, 9)), Ordering::Greater);
        assert_eq!(version(1, 0, 0).cmp_semver(&version(1, 0, 0)), Ordering::Equal);
    }

    #[test]
    fn bump_resets_lower_parts() {
        let mut current = version(1, 4, 7);
        current.online = true;
        current.locked = true;
        let next = current.bumped(VersionPart::Minor).unwrap();
        assert_eq!(next.label(), "1.5.0");
        assert_eq!(next.project, "sys");
        assert!(!next.online && !next.locked);
        assert_eq!(current.bumped(VersionPart::Major).unwrap().label(), "2.0.0");
        assert_eq!(current.bumped(VersionPart::Patch).unwrap().label(), "1.4.8");
    }

    #[test]
    fn bump_at_max_reports_overflow() {
        let top: VersionRecord = r#"{"project":"sys","major":9223372036854775807}"#
            .parse()
            .unwrap();
        assert!(matches!(
            top.bumped(VersionPart::Major),
            Err(CoreError::VersionOverflow(label)) if label == "9223372036854775807.0.0"
        ));
        assert_eq!(
            top.bumped(VersionPart::Minor).unwrap().label(),
            "9223372036854775807.1.0"
        );
        assert!(version(0, 0, i64::MAX).bumped(VersionPart::Patch).is_err());
        assert!(version(0, i64::MAX, 0).bumped(VersionPart::Minor).is_err());
    }

    #[test]
    fn matches_label_is_exact() {
        let v = version(0, 1, 0);
        assert!(v.matches_label("0.1.0"));
        assert!(!v.matches_label("00.01.000"));
        assert!(!v.matches_label("0.1.0 "));
    }

    #[test]
    fn map_construction_coerces_flags() {
        let map = json!({"project": "sys", "online": "true", "locked": 0, "major": "2"});
        let v = VersionRecord::from_map(map.as_object().unwrap());
        assert!(v.online);
        assert!(!v.locked);
        assert_eq!(v.label(), "2.0.0");
        assert!(v.matches_label("2.0.0"));
    }
}
