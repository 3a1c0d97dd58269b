use rand::Rng;
use serde_derive::{Deserialize, Serialize};

use crate::circular_queue::CircularQueue;
use crate::geometry::{BoundingBox, Position};

pub type EntityId = u64;

/// Render tag assigned once at creation and kept for the entity's lifetime.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Channels stay in 50..=255 so trails remain visible on dark frames.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(50..=255),
            g: rng.gen_range(50..=255),
            b: rng.gen_range(50..=255),
        }
    }
}

/// One tracked object: its latest box, the derived centroid, and the
/// trail of centroids from the frames in which it was seen.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub bbox: BoundingBox,
    pub centroid: Position,
    pub color: Color,
    history: CircularQueue<Position>,
}

impl Entity {
    pub fn new<R: Rng>(id: EntityId, bbox: BoundingBox, history_cap: usize, rng: &mut R) -> Self {
        let centroid = bbox.centroid();
        let mut history = CircularQueue::with_capacity(history_cap);
        history.push(centroid);

        Self {
            id,
            bbox,
            centroid,
            color: Color::random(rng),
            history,
        }
    }

    /// Replaces the box with this frame's detection, recomputes the
    /// centroid and appends it to the trail.
    pub fn apply(&mut self, bbox: BoundingBox) {
        self.bbox = bbox;
        self.centroid = bbox.centroid();
        self.history.push(self.centroid);
    }

    /// Centroid distance to another entity, in pixels.
    #[inline]
    pub fn distance(&self, other: &Entity) -> f32 {
        self.centroid.distance(&other.centroid)
    }

    /// Trail of centroids, oldest to newest.
    #[inline]
    pub fn history(&self) -> impl Iterator<Item = &'_ Position> {
        self.history.iter()
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
