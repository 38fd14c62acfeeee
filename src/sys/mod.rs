//! Boundary to the macOS window server.

pub mod source;
pub mod window_server;

#[cfg(target_os = "macos")] mod plist;
#[cfg(target_os = "macos")] mod screen;
#[cfg(target_os = "macos")] mod skylight;

pub use source::{SpaceQueryError, SpaceSource, query_space_info};
pub use window_server::WindowServer;
