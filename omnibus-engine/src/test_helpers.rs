// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! Helpers for tests that need a running engine with a trace file.

use std::fs;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use omnibus_track::tracker::{EntityManager, TextTracker};
use omnibus_track::{Tracker, Writer};

use crate::engine::Engine;

/// Create a tracker that writes a text trace named after the test file.
#[must_use]
pub fn create_tracker(full_filepath: &str) -> Tracker {
    // Place all trace files in one folder
    const FOLDER: &str = "traces";

    // Create that folder if it doesn't exist yet
    fs::create_dir_all(FOLDER).unwrap();

    let filename_only = Path::new(full_filepath)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap();

    let text_writer: Writer = Box::new(BufWriter::new(
        fs::File::create(format!("{FOLDER}/{filename_only}.txt")).unwrap(),
    ));

    let default_log_level = log::Level::Trace;
    let entity_manager = EntityManager::new(default_log_level);
    let tracker: Tracker = Arc::new(TextTracker::new(entity_manager, text_writer));
    tracker
}

#[must_use]
pub fn start_test(full_filepath: &str) -> Engine {
    Engine::new(&create_tracker(full_filepath))
}
