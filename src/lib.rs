pub mod entity;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod track;
pub mod tracker;
pub mod zone;

mod circular_queue;

#[cfg(test)]
mod test_tracker;

pub use entity::{Color, Entity, EntityId};
pub use error::Error;
pub use geometry::{BoundingBox, Position, Size};
pub use registry::Registry;
pub use track::Track;
pub use tracker::{Tracker, TrackerConfig, UpdateReport};
pub use zone::{Movement, MovementKind, MovementMonitor, ZoneConfig};

/// Seam between the per-frame pipeline and a tracker implementation:
/// feed one frame's detections, read back render-ready tracks.
pub trait Tracking {
    fn update(&mut self, detections: &[BoundingBox]) -> UpdateReport;
    fn get(&self, id: EntityId) -> Option<&Entity>;
    fn tracks(&self) -> Vec<Track>;
}
