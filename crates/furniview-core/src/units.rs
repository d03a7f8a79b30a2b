//! Unit conversion utilities
//!
//! The model stores every length in metres. Both views draw in scene units,
//! with a fixed scale of 100 scene units per metre. The 2D view applies its
//! zoom on top of that; the 3D view applies its own uniform scale.

/// Scene units per metre, shared by the 2D and 3D renderers.
pub const UNITS_PER_METER: f64 = 100.0;

/// Convert a length in metres to scene units.
pub fn meters_to_units(meters: f64) -> f64 {
    meters * UNITS_PER_METER
}

/// Convert a length in scene units to metres.
pub fn units_to_meters(units: f64) -> f64 {
    units / UNITS_PER_METER
}

/// Format a length in metres for labels, e.g. `4.5m`.
pub fn format_meters(meters: f64) -> String {
    format!("{:.1}m", meters)
}

/// Format a footprint for labels, e.g. `5.0m × 4.0m`.
pub fn format_footprint(width: f64, length: f64) -> String {
    format!("{} × {}", format_meters(width), format_meters(length))
}
