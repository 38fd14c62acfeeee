//! Numbering of spaces from the window server's managed display description.
//!
//! Each display record looks like
//!
//! ```text
//! {
//!     "Display Identifier": "37D8832A-2D66-02CA-B9F7-8F30A301B230",
//!     "Current Space": { "id64": 3, "uuid": "...", "type": 0, "ManagedSpaceID": 3 },
//!     "Spaces": [ { "id64": 3, "uuid": "...", "type": 0, "ManagedSpaceID": 3 }, ... ]
//! }
//! ```
//!
//! Spaces hosting a fullscreen app carry a `TileLayoutManager` dictionary and
//! are left out of the numbering.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::model::space::{Space, SpaceInfo};

#[derive(Debug, Deserialize)]
struct RawDisplay {
    #[serde(rename = "Current Space")]
    current_space: RawSpace,
    #[serde(rename = "Spaces")]
    spaces: Vec<Value>,
    #[serde(rename = "Display Identifier")]
    display_identifier: String,
}

#[derive(Debug, Deserialize)]
struct RawSpace {
    id64: i64,
    uuid: String,
    #[serde(rename = "type")]
    kind: i64,
    #[serde(rename = "ManagedSpaceID")]
    managed_space_id: i64,
    #[serde(rename = "TileLayoutManager", default)]
    tile_layout_manager: Option<Value>,
}

impl RawSpace {
    /// Fullscreen app spaces are the ones carrying a `TileLayoutManager` dictionary.
    fn is_fullscreen(&self) -> bool { matches!(self.tile_layout_manager, Some(Value::Object(_))) }

    fn to_space(&self, number: Option<usize>, order: usize, is_active: bool) -> Space {
        Space {
            id64: self.id64,
            uuid: self.uuid.clone(),
            kind: self.kind,
            managed_space_id: self.managed_space_id,
            number,
            order,
            is_active,
        }
    }
}

pub struct SpaceNumberResolver;

impl SpaceNumberResolver {
    /// Builds the [`SpaceInfo`] for one query.
    ///
    /// `records` are the per-display dictionaries in window server order.
    /// Records or spaces with missing fields are skipped and take no part in
    /// the numbering.
    pub fn resolve(records: &[Value], focused_display_uuid: Option<&str>) -> SpaceInfo {
        // Insertion ordered so active spaces come out in display order.
        let mut active_spaces: Vec<(String, Space)> = Vec::with_capacity(records.len());
        let mut all_spaces = Vec::new();
        let mut counter = 1;

        for (index, record) in records.iter().enumerate() {
            let raw_display = match RawDisplay::deserialize(record) {
                Ok(raw_display) => raw_display,
                Err(err) => {
                    debug!(index, %err, "Skipping malformed display record");
                    continue;
                }
            };
            let display_identifier = raw_display.display_identifier;
            let current = &raw_display.current_space;
            let spaces = parse_space_list(&raw_display.spaces, &display_identifier);

            let first_number = counter;
            for space in &spaces {
                let number = (!space.is_fullscreen()).then(|| {
                    counter += 1;
                    counter - 1
                });
                all_spaces.push(space.to_space(number, 0, space.uuid == current.uuid));
            }

            // None when the current space is fullscreen or not listed at all.
            let number = spaces
                .iter()
                .filter(|space| !space.is_fullscreen())
                .position(|space| space.uuid == current.uuid)
                .map(|offset| first_number + offset);
            if number.is_none() {
                trace!(
                    display = %display_identifier,
                    uuid = %current.uuid,
                    "Current space has no number"
                );
            }

            let order = active_spaces.len();
            active_spaces.push((display_identifier, current.to_space(number, order, true)));
        }

        // Later records win, like a keyed map that gets overwritten.
        let keyboard_focus_space = focused_display_uuid.and_then(|uuid| {
            active_spaces
                .iter()
                .rev()
                .find(|(display_identifier, _)| display_identifier == uuid)
                .map(|(_, space)| space.clone())
        });
        if keyboard_focus_space.is_none() {
            debug!(?focused_display_uuid, "No active space for focused display");
        }

        SpaceInfo {
            keyboard_focus_space,
            active_spaces: active_spaces.into_iter().map(|(_, space)| space).collect(),
            all_spaces,
        }
    }
}

fn parse_space_list(spaces: &[Value], display_identifier: &str) -> Vec<RawSpace> {
    spaces
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match RawSpace::deserialize(value) {
            Ok(space) => Some(space),
            Err(err) => {
                debug!(display = %display_identifier, index, %err, "Skipping malformed space");
                None
            }
        })
        .collect()
}
