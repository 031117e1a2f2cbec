use serde::{Deserialize, Serialize};

/// Value exchanged with the caller: the initial/controlled value and the
/// payload of every change notification.
///
/// Serialized untagged, so a single date is a plain string and a range is a
/// `{ start, end }` object. Absent ends are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PickerValue {
    Single(String),
    Range { start: String, end: String },
}

impl PickerValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(v) => v.is_empty(),
            Self::Range { start, end } => start.is_empty() && end.is_empty(),
        }
    }

    /// Text shown in the input box: the value, or the range start.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Single(v) => v,
            Self::Range { start, .. } => start,
        }
    }
}
