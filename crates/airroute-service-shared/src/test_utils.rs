//! Test utilities for handler testing.
//!
//! Loads the minimal CSV fixture shipped under `docs/fixtures/minimal`.

use std::path::PathBuf;
use std::sync::OnceLock;

use airroute_lib::LoadOptions;

use crate::state::AppState;

/// Path to the fixture data directory.
pub const TEST_FIXTURE_DIR: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/minimal"
);

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Shared [`AppState`] loaded from the fixture directory.
///
/// # Panics
///
/// Panics if the fixture cannot be loaded, which indicates a broken test
/// setup.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let path = fixture_dir();
            AppState::load(&path, LoadOptions::default())
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
        })
        .clone()
}

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_DIR)
}

/// Airport codes present in the fixture.
pub mod fixture_airports {
    /// Toronto; connects to JFK, YUL and YVR.
    pub const YYZ: &str = "YYZ";

    /// Los Angeles; reachable from YYZ via JFK or YVR.
    pub const LAX: &str = "LAX";

    pub const JFK: &str = "JFK";

    /// Halifax; has no routes in or out.
    pub const YHZ: &str = "YHZ";
}
