use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// AttributeRow - one persisted (component, property, value) fact
///
/// Rows are loosely typed: `style_value` is always a string and only the
/// resolver interprets it. The triple `(component_type, component_id,
/// style_property)` is not unique, so several rows may describe the same
/// property; stores return them in ascending `id` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRow {
    /// Store-assigned identifier, monotonic and never reused
    pub id: i64,

    /// Free-form category, e.g. "button"
    pub component_type: String,

    /// Free-form instance identifier, e.g. "main-button"
    pub component_id: String,

    /// Attribute name, e.g. "color" or "background-color"
    pub style_property: String,

    /// Raw attribute value
    pub style_value: String,

    /// Set once at insertion
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl AttributeRow {
    /// Build a freshly inserted row with both timestamps set to `at`
    pub fn from_new(id: i64, new: NewAttributeRow, at: DateTime<Utc>) -> Self {
        Self {
            id,
            component_type: new.component_type,
            component_id: new.component_id,
            style_property: new.style_property,
            style_value: new.style_value,
            created_at: at,
            updated_at: at,
        }
    }

    /// Exact, case-sensitive match on both component fields
    pub fn belongs_to(&self, component_type: &str, component_id: &str) -> bool {
        self.component_type == component_type && self.component_id == component_id
    }

    /// Apply the present fields of `patch` and stamp `updated_at`
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply_patch(&mut self, patch: &AttributeRowPatch, at: DateTime<Utc>) {
        if let Some(component_type) = &patch.component_type {
            self.component_type = component_type.clone();
        }
        if let Some(component_id) = &patch.component_id {
            self.component_id = component_id.clone();
        }
        if let Some(style_property) = &patch.style_property {
            self.style_property = style_property.clone();
        }
        if let Some(style_value) = &patch.style_value {
            self.style_value = style_value.clone();
        }
        self.updated_at = at;
    }
}

/// Input for creating a row; all four fields are required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttributeRow {
    pub component_type: String,
    pub component_id: String,
    pub style_property: String,
    pub style_value: String,
}

impl NewAttributeRow {
    pub fn new(
        component_type: impl Into<String>,
        component_id: impl Into<String>,
        style_property: impl Into<String>,
        style_value: impl Into<String>,
    ) -> Self {
        Self {
            component_type: component_type.into(),
            component_id: component_id.into(),
            style_property: style_property.into(),
            style_value: style_value.into(),
        }
    }
}

/// Partial update for a row addressed by id
///
/// `None` leaves the column unchanged. An empty patch is still a mutation:
/// it refreshes `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRowPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_value: Option<String>,
}

impl AttributeRowPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component_type(mut self, value: impl Into<String>) -> Self {
        self.component_type = Some(value.into());
        self
    }

    pub fn component_id(mut self, value: impl Into<String>) -> Self {
        self.component_id = Some(value.into());
        self
    }

    pub fn style_property(mut self, value: impl Into<String>) -> Self {
        self.style_property = Some(value.into());
        self
    }

    pub fn style_value(mut self, value: impl Into<String>) -> Self {
        self.style_value = Some(value.into());
        self
    }
}

/// Current UTC time truncated to milliseconds
///
/// Stores persist timestamps as epoch milliseconds; truncating here keeps
/// rows equal across a write/read round trip.
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> AttributeRow {
        let at = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        AttributeRow::from_new(
            1,
            NewAttributeRow::new("button", "main-button", "color", "red"),
            at,
        )
    }

    #[test]
    fn test_from_new_sets_both_timestamps() {
        let row = sample_row();
        assert_eq!(row.created_at, row.updated_at);
        assert_eq!(row.style_value, "red");
    }

    #[test]
    fn test_apply_patch_only_touches_present_fields() {
        let mut row = sample_row();
        let later = DateTime::from_timestamp_millis(1_700_000_005_000).unwrap();

        row.apply_patch(&AttributeRowPatch::new().style_value("blue"), later);

        assert_eq!(row.style_value, "blue");
        assert_eq!(row.component_type, "button");
        assert_eq!(row.component_id, "main-button");
        assert_eq!(row.style_property, "color");
        assert_eq!(row.updated_at, later);
        assert_ne!(row.created_at, later);
    }

    #[test]
    fn test_belongs_to_is_case_sensitive() {
        let row = sample_row();
        assert!(row.belongs_to("button", "main-button"));
        assert!(!row.belongs_to("Button", "main-button"));
        assert!(!row.belongs_to("button", "Main-Button"));
    }

    #[test]
    fn test_patch_deserializes_missing_fields_as_none() {
        let patch: AttributeRowPatch = serde_json::from_str(r#"{"style_value":"x"}"#).unwrap();
        assert_eq!(patch, AttributeRowPatch::new().style_value("x"));
        assert_eq!(patch.component_type, None);
        assert_eq!(patch.style_property, None);
    }

    #[test]
    fn test_now_has_millisecond_precision() {
        let t = now();
        assert_eq!(t.timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
