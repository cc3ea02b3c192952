use crate::request::Record;

use super::View;

/// A value a generator had to change to keep the chart meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub row: usize,
    pub field: String,
    pub original: f64,
    pub adjusted: f64,
}

/// Chart-type-specific output of a generator, before theming.
///
/// Colours inside `view` are theme role placeholders only.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecFragment {
    pub data: Vec<Record>,
    pub view: View,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub adjustments: Vec<Adjustment>,
}

impl SpecFragment {
    #[must_use]
    pub const fn new(data: Vec<Record>, view: View) -> Self {
        Self {
            data,
            view,
            width: None,
            height: None,
            adjustments: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub const fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_adjustments(mut self, adjustments: Vec<Adjustment>) -> Self {
        self.adjustments = adjustments;
        self
    }
}
