//! EnvData - shared per-tick environment snapshot
//!
//! One producer (the simulator integration) publishes a fresh
//! [`WorldSnapshot`] per tick; many sensor components read it. Readers
//! obtain an `Arc` to the snapshot, so a publish never makes a partially
//! built snapshot visible and a reader holding the previous tick keeps a
//! consistent view.

use std::sync::{Arc, RwLock};

use contracts::{Frustum, LaneBoundaries, Object, Objects};
use nalgebra::Isometry3;
use tracing::trace;

/// One simulation tick's view of the world.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    /// Simulation time (seconds)
    pub sim_time: f64,

    /// Ego pose and kinematics
    pub ego_object: Object,

    /// Ego front wheel steering angle (rad)
    pub ego_steering_angle: f64,

    /// Objects sensed this tick
    pub world_objects: Objects,

    /// Lane boundaries sensed this tick
    pub lane_boundaries: LaneBoundaries,

    /// Sensing frustum
    pub frustum: Frustum,

    /// Sensor mount pose relative to the vehicle reference frame
    pub mount_pose: Isometry3<f64>,
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self {
            sim_time: 0.0,
            ego_object: Object::default(),
            ego_steering_angle: 0.0,
            world_objects: Vec::new(),
            lane_boundaries: Vec::new(),
            frustum: Frustum::default(),
            mount_pose: Isometry3::identity(),
        }
    }
}

/// Shared snapshot holder.
///
/// Sensor components hold an `Arc<EnvData>` and never own the snapshot
/// lifecycle; the simulator integration owns publishing.
#[derive(Default)]
pub struct EnvData {
    current: RwLock<Arc<WorldSnapshot>>,
}

impl EnvData {
    /// Create a holder with an empty default snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a holder seeded with `snapshot`.
    pub fn with_snapshot(snapshot: WorldSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Publish the next tick's snapshot, replacing the current one.
    pub fn publish(&self, snapshot: WorldSnapshot) {
        trace!(sim_time = snapshot.sim_time, "publishing world snapshot");
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(snapshot);
    }

    /// Current snapshot handle.
    ///
    /// The returned snapshot stays internally consistent even if a new
    /// tick is published while the caller still holds it.
    pub fn snapshot(&self) -> Arc<WorldSnapshot> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Current ego pose and kinematics.
    pub fn get_ego_object(&self) -> Object {
        self.snapshot().ego_object.clone()
    }

    /// Current ego front wheel steering angle (rad).
    pub fn get_ego_steering_angle(&self) -> f64 {
        self.snapshot().ego_steering_angle
    }

    /// Objects sensed in the current tick.
    pub fn get_world_objects(&self) -> Objects {
        self.snapshot().world_objects.clone()
    }

    /// Lane boundaries sensed in the current tick.
    pub fn get_lane_boundaries(&self) -> LaneBoundaries {
        self.snapshot().lane_boundaries.clone()
    }

    /// Sensing frustum.
    pub fn get_frustum(&self) -> Frustum {
        self.snapshot().frustum
    }

    /// Sensor mount pose.
    pub fn get_mount_pose(&self) -> Isometry3<f64> {
        self.snapshot().mount_pose
    }
}
