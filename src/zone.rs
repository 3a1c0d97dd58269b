use std::collections::HashMap;

use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::registry::Registry;

/// Horizontal bands at the top and bottom of the frame, as fractions of
/// the frame height. An entity spawning inside a band and later crossing
/// into the opposite one counts as a movement through the doorway.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ZoneConfig {
    pub top: f32,
    pub bottom: f32,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            top: 0.1,
            bottom: 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    /// Bottom band to top band.
    Entry,
    /// Top band to bottom band.
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub id: EntityId,
    pub kind: MovementKind,
}

// Trails shorter than this are too jittery to call a crossing.
const MIN_TRAIL_FRAMES: usize = 5;

#[derive(Debug)]
struct ZoneState {
    from_top: bool,
    from_bottom: bool,
    reported: bool,
}

/// Watches a tracker's registry frame by frame and emits one `Movement`
/// per entity that crosses between the bands. State for entities the
/// tracker has dropped is purged.
pub struct MovementMonitor {
    config: ZoneConfig,
    frame_height: u32,
    states: HashMap<EntityId, ZoneState>,
}

impl MovementMonitor {
    pub fn new(config: ZoneConfig, frame_height: u32) -> Self {
        Self {
            config,
            frame_height,
            states: HashMap::new(),
        }
    }

    /// Call once per frame, after `Tracker::update`.
    pub fn observe(&mut self, registry: &Registry) -> Vec<Movement> {
        let top_y = (self.frame_height as f32 * self.config.top) as i32;
        let bottom_y = (self.frame_height as f32 * self.config.bottom) as i32;
        let mut events = Vec::new();

        for entity in registry {
            let state = self.states.entry(entity.id).or_insert_with(|| {
                // Origin is judged from the spawn box edges: an entity
                // whose box already touches a band came in through it.
                ZoneState {
                    from_top: entity.bbox.top() < top_y,
                    from_bottom: entity.bbox.bottom() > bottom_y,
                    reported: false,
                }
            });

            if let Some(movement) = Self::evaluate(
                entity.id,
                state,
                entity.history_len(),
                entity.centroid.y,
                top_y,
                bottom_y,
            ) {
                events.push(movement);
            }
        }

        self.states.retain(|&id, _| {
            if registry.get(id).is_some() {
                return true;
            }

            debug!("zone state for entity {} purged", id);
            false
        });

        events
    }

    fn evaluate(
        id: EntityId,
        state: &mut ZoneState,
        trail_len: usize,
        y: i32,
        top_y: i32,
        bottom_y: i32,
    ) -> Option<Movement> {
        if state.reported || trail_len < MIN_TRAIL_FRAMES {
            return None;
        }

        if state.from_bottom && y < top_y {
            state.reported = true;
            return Some(Movement {
                id,
                kind: MovementKind::Entry,
            });
        }

        if state.from_top && y > bottom_y {
            state.reported = true;
            return Some(Movement {
                id,
                kind: MovementKind::Exit,
            });
        }

        None
    }
}
