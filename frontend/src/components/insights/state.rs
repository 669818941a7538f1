//! State of the insight board.

use common::model::insight::{InsightEntry, InsightFilter, InsightForm};
use yew::NodeRef;

pub struct InsightsPanel {
    /// Every loaded insight, newest first. Likes are edited in place.
    pub entries: Vec<InsightEntry>,

    pub filter: InsightFilter,

    /// Contents of the share form.
    pub form: InsightForm,

    /// The top sheet holding the share form.
    pub form_ref: NodeRef,

    pub loading: bool,
    pub saving: bool,

    /// Last store or validation error, shown above the grid.
    pub error: Option<String>,
}

impl InsightsPanel {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            filter: InsightFilter::All,
            form: InsightForm::default(),
            form_ref: NodeRef::default(),
            loading: false,
            saving: false,
            error: None,
        }
    }

    /// Entries passing the active filter chip.
    pub fn visible(&self) -> impl Iterator<Item = &InsightEntry> {
        self.entries.iter().filter(|e| self.filter.matches(e))
    }
}
