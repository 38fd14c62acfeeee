use serde::Serialize;

/// One virtual desktop as reported by the window server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Space {
    pub id64: i64,
    pub uuid: String,
    /// Opaque window server space type.
    #[serde(rename = "type")]
    pub kind: i64,
    pub managed_space_id: i64,
    /// 1-based position among non-fullscreen spaces across all displays.
    /// Fullscreen app spaces are never numbered.
    pub number: Option<usize>,
    /// Index of the display this entry was produced for. Only meaningful on
    /// active space entries; flattened entries always carry 0.
    pub order: usize,
    /// True if the space is the one currently shown on its display.
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpaceInfo {
    /// Active space of the display that holds keyboard focus.
    pub keyboard_focus_space: Option<Space>,
    /// One entry per display, in enumeration order.
    pub active_spaces: Vec<Space>,
    pub all_spaces: Vec<Space>,
}

impl SpaceInfo {
    /// The number to report for this query.
    ///
    /// Falls back to the first display's active space when the focused space
    /// is unknown or unnumbered.
    pub fn display_number(&self) -> Option<usize> {
        self.keyboard_focus_space
            .as_ref()
            .and_then(|space| space.number)
            .or_else(|| self.active_spaces.first().and_then(|space| space.number))
    }
}
