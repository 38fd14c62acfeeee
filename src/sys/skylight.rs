//! Private window server calls not covered by the objc2 crates.
//!
//! Only read-only queries are declared here.

use std::ffi::c_int;
use std::ptr::NonNull;

use objc2::runtime::AnyObject;

pub type ConnectionId = c_int;

#[link(name = "SkyLight", kind = "framework")]
unsafe extern "C" {
    pub fn SLSMainConnectionID() -> ConnectionId;

    /// Returns an owned `CFArray` of per-display `CFDictionary` records.
    pub fn SLSCopyManagedDisplaySpaces(cid: ConnectionId) -> Option<NonNull<AnyObject>>;
}
