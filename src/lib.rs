//! Reports which macOS space (virtual desktop) currently has keyboard focus.
//!
//! The window server hands out a nested description of every display and the
//! spaces on it. [`model::resolver`] turns that description into numbered
//! [`model::Space`] values; [`sys`] is the thin layer that talks to the OS.

pub mod common;
pub mod model;
pub mod sys;
