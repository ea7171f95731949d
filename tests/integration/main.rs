//! Workspace integration tests for the pkgwatch plugin.
//!
//! These tests play the host role: they load configuration, deliver
//! package events, fire the post-operation hook, and observe what the
//! configured scripts were actually invoked with.

mod helpers;

mod config_test;
