use serde_json::Value;
#[cfg(target_os = "macos")]
use tracing::debug;

use super::source::{SpaceQueryError, SpaceSource};

/// [`SpaceSource`] backed by the live window server session.
pub struct WindowServer {
    #[cfg(target_os = "macos")]
    connection: super::skylight::ConnectionId,
}

#[cfg(target_os = "macos")]
impl WindowServer {
    pub fn new() -> Self {
        let connection = unsafe { super::skylight::SLSMainConnectionID() };
        debug!(connection, "Connected to window server");
        Self { connection }
    }
}

#[cfg(target_os = "macos")]
impl SpaceSource for WindowServer {
    fn managed_display_spaces(&self) -> Result<Vec<Value>, SpaceQueryError> {
        use objc2::rc::Retained;

        // SAFETY: the copy rule hands us ownership of the returned array.
        let displays = unsafe { super::skylight::SLSCopyManagedDisplaySpaces(self.connection) }
            .and_then(|ptr| unsafe { Retained::from_raw(ptr.as_ptr()) })
            .ok_or(SpaceQueryError::NoDisplaySpaces)?;
        match super::plist::to_value(&displays) {
            Value::Array(records) => {
                debug!(displays = records.len(), "Read managed display spaces");
                Ok(records)
            }
            _ => Err(SpaceQueryError::NoDisplaySpaces),
        }
    }

    fn focused_display_uuid(&self) -> Result<String, SpaceQueryError> {
        let display = super::screen::main_screen_number()?;
        let uuid = super::screen::display_uuid(display)?;
        debug!(display, %uuid, "Resolved focused display");
        Ok(uuid)
    }
}

#[cfg(not(target_os = "macos"))]
impl WindowServer {
    pub fn new() -> Self { Self {} }
}

#[cfg(not(target_os = "macos"))]
impl SpaceSource for WindowServer {
    fn managed_display_spaces(&self) -> Result<Vec<Value>, SpaceQueryError> {
        Err(SpaceQueryError::Unsupported)
    }

    fn focused_display_uuid(&self) -> Result<String, SpaceQueryError> {
        Err(SpaceQueryError::Unsupported)
    }
}

impl Default for WindowServer {
    fn default() -> Self { Self::new() }
}
