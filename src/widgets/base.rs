use unicode_width::UnicodeWidthStr;

/// Identity and screen placement shared by widgets.
#[derive(Debug, Clone)]
pub struct WidgetBase {
    id: String,
    label: String,
    origin: (u16, u16),
}

impl WidgetBase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            origin: (0, 0),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// `"{label}: "`, or nothing for an unlabeled widget.
    pub fn label_prefix(&self) -> String {
        if self.label.is_empty() {
            String::new()
        } else {
            format!("{}: ", self.label)
        }
    }

    pub fn label_width(&self) -> u16 {
        self.label_prefix().width() as u16
    }

    /// Top-left terminal cell the widget is drawn at, as `(row, col)`.
    pub fn origin(&self) -> (u16, u16) {
        self.origin
    }

    pub fn set_origin(&mut self, row: u16, col: u16) {
        self.origin = (row, col);
    }

    /// Converts an absolute cell into widget-local coordinates.
    pub fn to_local(&self, row: u16, col: u16) -> Option<(u16, u16)> {
        let (origin_row, origin_col) = self.origin;
        Some((row.checked_sub(origin_row)?, col.checked_sub(origin_col)?))
    }
}
