use serde_derive::{Deserialize, Serialize};

use crate::entity::{Color, Entity, EntityId};
use crate::geometry::{BoundingBox, Position};

/// Render-ready snapshot of a live entity: box, centroid trail and the
/// color tag the renderer draws with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: EntityId,
    pub bbox: BoundingBox,
    pub centroid: Position,

    // oldest to newest, in px
    pub trail: Vec<Position>,

    pub color: Color,
}

impl From<&Entity> for Track {
    fn from(entity: &Entity) -> Track {
        Track {
            id: entity.id,
            bbox: entity.bbox,
            centroid: entity.centroid,
            trail: entity.history().copied().collect(),
            color: entity.color,
        }
    }
}
