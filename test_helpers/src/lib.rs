//! Test helpers shared across crates in the `load_config` workspace.
//!
//! The helpers wrap [`figment::Jail`], which serialises access to the process
//! environment and runs each closure inside a fresh temporary directory.

pub mod jail;
