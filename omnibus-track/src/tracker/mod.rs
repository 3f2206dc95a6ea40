// Copyright (c) 2025 The OMNIBUS developers. All rights reserved.

//! Define the [`Track`] trait and a number of [`Tracker`]s.

/// Include the /dev/null tracker.
pub mod dev_null;
/// Include the text-based tracker.
pub mod text;

/// Include the multi-tracker.
pub mod multi_tracker;

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub use dev_null::DevNullTracker;
use regex::Regex;
pub use text::TextTracker;

use crate::{Id, ROOT};

/// This is the interface that is supported by all [`Tracker`]s.
pub trait Track {
    /// Allocate a new global ID.
    fn unique_id(&self) -> Id;

    /// Determine whether the entity has _track_ events enabled at the given
    /// level.
    fn is_entity_enabled(&self, id: Id, level: log::Level) -> bool;

    /// Register an entity so that its level enables can be resolved.
    fn add_entity(&self, id: Id, entity_name: &str);

    /// Track when an object with the given ID arrives.
    fn enter(&self, id: Id, object: Id);

    /// Track when an object with the given ID leaves.
    fn exit(&self, id: Id, object: Id);

    /// Track when an object with the given ID is created.
    fn create(&self, created_by: Id, id: Id, num_bytes: usize, req_type: i8, name: &str);

    /// Track when an object with the given ID is destroyed.
    fn destroy(&self, destroyed_by: Id, id: Id);

    /// Track the connection of two entities.
    fn connect(&self, connect_from: Id, connect_to: Id);

    /// Track a log message of the given level.
    fn log(&self, id: Id, level: log::Level, msg: std::fmt::Arguments);

    /// Advance the time to the time specified in `ns`.
    fn time(&self, set_by: Id, time_ns: f64);

    /// Flush any buffered output.
    fn shutdown(&self);
}

/// The type of a [`Tracker`] that is shared across entities.
pub type Tracker = Arc<dyn Track + Send + Sync>;

/// Error raised for invalid tracker configuration (e.g. a bad filter regex).
#[derive(Debug)]
pub struct TrackConfigError(pub String);

impl fmt::Display for TrackConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Track config error: {}", self.0)
    }
}

impl Error for TrackConfigError {}

/// Create a [`Tracker`] that prints all track events to `stdout`.
pub fn stdout_tracker(level: log::Level) -> Tracker {
    let entity_manager = EntityManager::new(level);
    let stdout_writer = Box::new(io::BufWriter::new(io::stdout()));
    let tracker: Tracker = Arc::new(TextTracker::new(entity_manager, stdout_writer));
    tracker
}

/// Create a [`Tracker`] that suppresses all track events.
pub fn dev_null_tracker() -> Tracker {
    let tracker: Tracker = Arc::new(DevNullTracker {});
    tracker
}

/// The [`EntityManager`] is responsible for determining entity log / trace
/// enable states.
///
/// This is shared by all trackers that filter their output per entity.
///
/// This manager is also used to allocate unique [`Id`] values.
pub struct EntityManager {
    /// Level of _track_ events to output when no filter matches.
    default_level: log::Level,

    /// List of regular expressions mapping entity names to log levels.
    regex_to_level: Vec<(Regex, log::Level)>,

    /// Resolved level for each registered entity.
    id_to_level: Mutex<HashMap<Id, log::Level>>,

    /// Used to assign unique IDs.
    unique_id: AtomicU64,
}

impl EntityManager {
    /// Constructor with the default [`log::Level`]
    #[must_use]
    pub fn new(default_level: log::Level) -> Self {
        Self {
            default_level,
            regex_to_level: Vec::new(),
            id_to_level: Mutex::new(HashMap::new()),
            unique_id: AtomicU64::new(ROOT.0 + 1),
        }
    }

    pub(crate) fn unique_id(&self) -> Id {
        let id = self.unique_id.fetch_add(1, Ordering::SeqCst);
        Id(id)
    }

    fn level_for(&self, entity_name: &str) -> log::Level {
        for (regex, level) in self.regex_to_level.iter() {
            if regex.is_match(entity_name) {
                return *level;
            }
        }
        self.default_level
    }

    /// Register an entity; its level is resolved once against the filters.
    pub fn add_entity(&self, id: Id, entity_name: &str) {
        let level = self.level_for(entity_name);
        self.id_to_level.lock().unwrap().insert(id, level);
    }

    /// Determine whether the entity has the requested level enabled.
    pub fn is_enabled(&self, id: Id, level: log::Level) -> bool {
        match self.id_to_level.lock().unwrap().get(&id) {
            Some(enabled_level) => level <= *enabled_level,
            None => level <= self.default_level,
        }
    }

    /// Add a level filter regular expression.
    ///
    /// The first pattern added has the highest priority. Filters must be in
    /// place before the matching entities are created.
    ///
    /// # Example
    ///
    /// ```rust
    /// use omnibus_track::tracker::EntityManager;
    /// let mut manager = EntityManager::new(log::Level::Warn);
    /// manager.add_entity_level_filter(".*driver.*", log::Level::Trace).unwrap();
    /// ```
    pub fn add_entity_level_filter(
        &mut self,
        regex_str: &str,
        level: log::Level,
    ) -> Result<(), TrackConfigError> {
        match Regex::new(regex_str) {
            Ok(regex) => {
                self.regex_to_level.push((regex, level));
                Ok(())
            }
            Err(e) => Err(TrackConfigError(format!(
                "failed to parse regex {regex_str}: {e}"
            ))),
        }
    }
}
