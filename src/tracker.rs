use log::{debug, trace};
use serde_derive::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};
use crate::error::Error;
use crate::geometry::BoundingBox;
use crate::registry::Registry;
use crate::track::Track;
use crate::Tracking;

/// Tunables. The defaults come from the counting camera this was built
/// for; both are resolution-dependent and should be set per deployment.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct TrackerConfig {
    /// Maximum centroid distance, in pixels, for a detection to inherit
    /// an existing id. Strictly-below comparison.
    pub distance_threshold: f32,

    /// Number of centroids kept per entity trail; the oldest entry is
    /// evicted once the trail is full.
    pub history_cap: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 100.0,
            history_cap: 30,
        }
    }
}

/// What one `update` call did, per detection. Rejections carry the
/// detection index so the caller can report them without losing the
/// rest of the frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReport {
    pub matched: usize,
    pub created: usize,
    pub lost: usize,
    pub rejected: Vec<Error>,
}

/// Per-frame centroid tracker. Owns the registry of live entities and
/// rebuilds it on every `update`: each detection either inherits the id
/// of the first sufficiently close previous entity (greedy, first fit,
/// in detection order) or spawns a fresh one, and previous entities
/// left unmatched are dropped the same frame.
pub struct Tracker {
    config: TrackerConfig,
    next_id: EntityId,
    registry: Registry,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            next_id: 0,
            registry: Registry::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    // Ids are never reused within a tracker's lifetime, so a lost
    // entity's id cannot come back on a later detection.
    fn alloc_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Consumes one frame's detections, in detector order, and replaces
    /// the registry. Detections with negative dimensions are rejected
    /// individually; the rest of the frame is still processed.
    pub fn update(&mut self, detections: &[BoundingBox]) -> UpdateReport {
        let mut report = UpdateReport::default();

        // Snapshot-then-rebuild: the previous registry becomes the pool
        // of match candidates and is discarded at the end of the frame.
        let mut pool = std::mem::take(&mut self.registry).into_entries();
        let mut next = Registry::with_capacity(detections.len());

        for (index, bbox) in detections.iter().enumerate() {
            if bbox.size.width < 0 || bbox.size.height < 0 {
                report.rejected.push(Error::InvalidDetection {
                    index,
                    width: bbox.size.width,
                    height: bbox.size.height,
                });
                continue;
            }

            let centroid = bbox.centroid();

            // First previous entry below the threshold wins, scanned in
            // insertion order. Not nearest-match: with two candidates in
            // range the detection order decides, deterministically.
            let matched = pool.iter().position(|prev| {
                prev.centroid.distance(&centroid) < self.config.distance_threshold
            });

            match matched {
                Some(i) => {
                    let mut entity = pool.remove(i);
                    trace!(
                        "entity {} matched detection {} at ({}, {})",
                        entity.id,
                        index,
                        centroid.x,
                        centroid.y
                    );
                    entity.apply(*bbox);
                    next.insert(entity);
                    report.matched += 1;
                }
                None => {
                    let id = self.alloc_id();
                    debug!("new entity {} at ({}, {})", id, centroid.x, centroid.y);
                    next.insert(Entity::new(
                        id,
                        *bbox,
                        self.config.history_cap,
                        &mut rand::thread_rng(),
                    ));
                    report.created += 1;
                }
            }
        }

        // No grace period: anything left in the pool is gone.
        report.lost = pool.len();
        for entity in &pool {
            debug!("entity {} lost", entity.id);
        }

        self.registry = next;
        report
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.registry.get(id)
    }

    #[inline]
    pub fn entities(&self) -> &Registry {
        &self.registry
    }

    pub fn tracks(&self) -> Vec<Track> {
        self.registry.iter().map(Into::into).collect()
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl Tracking for Tracker {
    #[inline]
    fn update(&mut self, detections: &[BoundingBox]) -> UpdateReport {
        Tracker::update(self, detections)
    }

    #[inline]
    fn get(&self, id: EntityId) -> Option<&Entity> {
        Tracker::get(self, id)
    }

    #[inline]
    fn tracks(&self) -> Vec<Track> {
        Tracker::tracks(self)
    }
}
