use serde_json::Value;
use tracing::{trace, warn};

use crate::model::{SpaceInfo, SpaceNumberResolver};

#[derive(Debug, thiserror::Error)]
pub enum SpaceQueryError {
    #[error("space queries are only supported on macOS")]
    Unsupported,
    #[error("screen queries must run on the main thread")]
    NotMainThread,
    #[error("no main screen")]
    NoMainScreen,
    #[error("main screen has no NSScreenNumber")]
    NoScreenNumber,
    #[error("no display UUID for display {0}")]
    NoDisplayUuid(u32),
    #[error("window server returned no managed display spaces")]
    NoDisplaySpaces,
}

/// Where the raw space description comes from.
///
/// The numbering itself never touches the OS; implementors only hand over
/// the window server's data as-is.
pub trait SpaceSource {
    /// Per-display records, in the order the window server lists them.
    fn managed_display_spaces(&self) -> Result<Vec<Value>, SpaceQueryError>;

    /// Identifier of the display that currently has keyboard focus.
    fn focused_display_uuid(&self) -> Result<String, SpaceQueryError>;
}

/// Runs one query against `source`. Failures degrade to missing data.
pub fn query_space_info(source: &impl SpaceSource) -> SpaceInfo {
    let records = source.managed_display_spaces().unwrap_or_else(|err| {
        warn!(%err, "Could not read managed display spaces");
        Vec::new()
    });
    let focused_display_uuid = source
        .focused_display_uuid()
        .inspect_err(|err| warn!(%err, "Could not resolve focused display"))
        .ok();

    let info = SpaceNumberResolver::resolve(&records, focused_display_uuid.as_deref());
    if tracing::enabled!(tracing::Level::TRACE) {
        match serde_json::to_string(&info) {
            Ok(json) => trace!(info = %json, "Resolved spaces"),
            Err(err) => trace!(%err, "Could not serialize resolved spaces"),
        }
    }
    info
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    struct Fixture {
        records: Option<Vec<Value>>,
        focused: Option<&'static str>,
    }

    impl SpaceSource for Fixture {
        fn managed_display_spaces(&self) -> Result<Vec<Value>, SpaceQueryError> {
            self.records.clone().ok_or(SpaceQueryError::NoDisplaySpaces)
        }

        fn focused_display_uuid(&self) -> Result<String, SpaceQueryError> {
            self.focused.map(str::to_string).ok_or(SpaceQueryError::NoMainScreen)
        }
    }

    fn records() -> Vec<Value> {
        let space = |id: u64| {
            json!({ "id64": id, "uuid": format!("space-{id}"), "type": 0, "ManagedSpaceID": id })
        };
        vec![
            json!({ "Display Identifier": "left", "Current Space": space(1), "Spaces": [space(1), space(2)] }),
            json!({ "Display Identifier": "right", "Current Space": space(3), "Spaces": [space(3)] }),
        ]
    }

    #[test_log::test]
    fn focused_display_picks_its_space() {
        let info = query_space_info(&Fixture {
            records: Some(records()),
            focused: Some("right"),
        });
        assert_eq!(info.display_number(), Some(3));
    }

    #[test_log::test]
    fn focus_failure_keeps_display_records() {
        let info = query_space_info(&Fixture { records: Some(records()), focused: None });

        assert_eq!(info.keyboard_focus_space, None);
        assert_eq!(info.active_spaces.len(), 2);
        assert_eq!(info.display_number(), Some(1));
    }

    #[test_log::test]
    fn display_query_failure_yields_empty_info() {
        let info = query_space_info(&Fixture { records: None, focused: Some("left") });

        assert_eq!(info, SpaceInfo::default());
        assert_eq!(info.display_number(), None);
    }

    #[test]
    fn errors_describe_the_missing_piece() {
        assert_eq!(
            SpaceQueryError::NoDisplayUuid(69733382).to_string(),
            "no display UUID for display 69733382"
        );
    }
}
