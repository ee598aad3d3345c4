//! Bridge metric names and recording helpers.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};

/// Simulation ticks completed
pub const TICKS_TOTAL: &str = "esmini_bridge_ticks_total";

/// Wall-clock duration of one tick (simulator step + snapshot publish)
pub const TICK_DURATION_MS: &str = "esmini_bridge_tick_duration_ms";

/// Objects in the current snapshot
pub const SNAPSHOT_OBJECTS: &str = "esmini_bridge_snapshot_objects";

/// Lane boundaries in the current snapshot
pub const SNAPSHOT_LANE_BOUNDARIES: &str = "esmini_bridge_snapshot_lane_boundaries";

/// Actuation signal writes accepted, labeled by path
pub const SIGNAL_WRITES_TOTAL: &str = "esmini_bridge_signal_writes_total";

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_counter!(TICKS_TOTAL, "Simulation ticks completed");
    describe_histogram!(
        TICK_DURATION_MS,
        "Wall-clock duration of one simulation tick in milliseconds"
    );
    describe_gauge!(SNAPSHOT_OBJECTS, "Objects in the current world snapshot");
    describe_gauge!(
        SNAPSHOT_LANE_BOUNDARIES,
        "Lane boundaries in the current world snapshot"
    );
    describe_counter!(
        SIGNAL_WRITES_TOTAL,
        "Actuation signal writes accepted, labeled by signal path"
    );
}

/// Record one completed simulation tick.
pub fn record_tick(duration_ms: f64, objects: usize, lane_boundaries: usize) {
    counter!(TICKS_TOTAL).increment(1);
    histogram!(TICK_DURATION_MS).record(duration_ms);
    gauge!(SNAPSHOT_OBJECTS).set(objects as f64);
    gauge!(SNAPSHOT_LANE_BOUNDARIES).set(lane_boundaries as f64);
}

/// Record one accepted actuation signal write.
pub fn record_signal_write(path: &str) {
    counter!(SIGNAL_WRITES_TOTAL, "path" => path.to_string()).increment(1);
}
