//! Host package events consumed by the plugin.
//!
//! The host emits one event per step of a package operation batch. Only
//! the `*Finished` events for install, deinstall, and upgrade carry a
//! package reference relevant to change watching; everything else is
//! delivered for completeness and ignored by the collector.

pub mod package;

pub use package::{PackageEvent, PackageRef};
