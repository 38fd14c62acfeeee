use std::ptr::NonNull;

use objc2::MainThreadMarker;
use objc2_app_kit::NSScreen;
use objc2_core_foundation::{CFRetained, CFUUID};
use objc2_core_graphics::CGDirectDisplayID;
use objc2_foundation::{NSNumber, ns_string};

use super::SpaceQueryError;

#[link(name = "ColorSync", kind = "framework")]
unsafe extern "C" {
    /// Follows the create rule; the caller releases the result.
    fn CGDisplayCreateUUIDFromDisplayID(display: CGDirectDisplayID) -> Option<NonNull<CFUUID>>;
}

/// Display id of the screen holding the key window (`NSScreen.mainScreen`).
pub fn main_screen_number() -> Result<CGDirectDisplayID, SpaceQueryError> {
    let mtm = MainThreadMarker::new().ok_or(SpaceQueryError::NotMainThread)?;
    let screen = NSScreen::mainScreen(mtm).ok_or(SpaceQueryError::NoMainScreen)?;
    let description = screen.deviceDescription();
    let number = description
        .objectForKey(ns_string!("NSScreenNumber"))
        .and_then(|object| object.downcast::<NSNumber>().ok())
        .ok_or(SpaceQueryError::NoScreenNumber)?;
    Ok(number.unsignedIntValue())
}

/// The UUID string the window server uses as "Display Identifier".
pub fn display_uuid(display: CGDirectDisplayID) -> Result<String, SpaceQueryError> {
    // SAFETY: the create rule moves ownership of the UUID into CFRetained.
    let uuid = unsafe { CGDisplayCreateUUIDFromDisplayID(display) }
        .map(|ptr| unsafe { CFRetained::from_raw(ptr) })
        .ok_or(SpaceQueryError::NoDisplayUuid(display))?;
    let string =
        CFUUID::new_string(None, Some(&uuid)).ok_or(SpaceQueryError::NoDisplayUuid(display))?;
    Ok(string.to_string())
}
