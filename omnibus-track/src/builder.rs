// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! Library functions to build trackers as defined by the user.

use std::io::BufWriter;
use std::sync::Arc;
use std::{fs, io};

use crate::tracker::multi_tracker::MultiTracker;
use crate::tracker::{EntityManager, TextTracker, TrackConfigError};
use crate::{Tracker, Writer};

/// Configuration options for an individual tracker.
pub struct TrackerConfig<'a> {
    /// Enable this tracker.
    pub enable: bool,

    /// Set the level at which this tracker should be enabled.
    pub level: log::Level,

    /// A regular expression to match which entities should have this level
    /// applied.
    pub filter_regex: &'a str,

    /// If required, the name of the file to which the tracker will write.
    pub file: Option<&'a str>,
}

impl Default for TrackerConfig<'_> {
    fn default() -> Self {
        Self {
            enable: true,
            level: log::Level::Warn,
            filter_regex: "",
            file: None,
        }
    }
}

/// Configuration options for all tracking.
pub struct TrackersConfig<'a> {
    /// Configuration for stdout.
    pub stdout: TrackerConfig<'a>,

    /// Configuration for a text trace file.
    pub logfile: TrackerConfig<'a>,
}

fn build_entity_manager(config: &TrackerConfig) -> Result<EntityManager, TrackConfigError> {
    // When a filter is given only the matching entities get the requested
    // level; everything else is errors only.
    let default_level = if config.filter_regex.is_empty() {
        config.level
    } else {
        log::Level::Error
    };

    let mut entity_manager = EntityManager::new(default_level);
    if !config.filter_regex.is_empty() {
        entity_manager.add_entity_level_filter(config.filter_regex, config.level)?;
    }
    Ok(entity_manager)
}

/// Create a tracker that prints to stdout
///
/// The user can pass a filter regular expression which will set the level only
/// for matching Entities and set all other Entities to only emit errors.
fn build_stdout_tracker(config: &TrackerConfig) -> Result<Tracker, TrackConfigError> {
    let entity_manager = build_entity_manager(config)?;
    let stdout_writer = Box::new(BufWriter::new(io::stdout()));
    Ok(Arc::new(TextTracker::new(entity_manager, stdout_writer)))
}

/// Same as the stdout tracker (see build_stdout_tracker) except will write to
/// the configured file.
fn build_file_tracker(config: &TrackerConfig) -> Result<Tracker, TrackConfigError> {
    let entity_manager = build_entity_manager(config)?;

    let trace_file = config
        .file
        .ok_or_else(|| TrackConfigError("no trace file name given".to_string()))?;
    let file = fs::File::create(trace_file)
        .map_err(|e| TrackConfigError(format!("failed to create {trace_file}: {e}")))?;
    let file_writer: Writer = Box::new(BufWriter::new(file));
    Ok(Arc::new(TextTracker::new(entity_manager, file_writer)))
}

/// Set up stdout/file trackers according to the user's configuration.
pub fn setup_trackers(config: &TrackersConfig) -> Result<Tracker, TrackConfigError> {
    if config.stdout.enable && config.logfile.enable {
        let mut tracker = MultiTracker::default();
        tracker.add_tracker(build_stdout_tracker(&config.stdout)?);
        tracker.add_tracker(build_file_tracker(&config.logfile)?);
        Ok(Arc::new(tracker))
    } else if config.logfile.enable {
        build_file_tracker(&config.logfile)
    } else if config.stdout.enable {
        build_stdout_tracker(&config.stdout)
    } else {
        build_stdout_tracker(&TrackerConfig::default())
    }
}
