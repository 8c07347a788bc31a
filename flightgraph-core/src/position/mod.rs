mod position_ops;

pub use position_ops::{display_position, interpolate, resolve_track_times};
