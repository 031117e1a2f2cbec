use super::value::PickerValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEffect {
    /// A selection was finalized; the caller's change callback receives it.
    Commit(PickerValue),
    Opened,
    Closed,
}
