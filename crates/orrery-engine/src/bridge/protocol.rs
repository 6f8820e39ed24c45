/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Spheres: max_spheres × 8 floats]
/// [Path vertices: max_path_vertices × 3 floats]
/// [Points: max_points × 4 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_SPHERES: usize = 2;
pub const HEADER_SPHERE_COUNT: usize = 3;
pub const HEADER_MAX_PATH_VERTICES: usize = 4;
pub const HEADER_PATH_VERTEX_COUNT: usize = 5;
pub const HEADER_MAX_POINTS: usize = 6;
pub const HEADER_POINT_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_PROTOCOL_VERSION: usize = 10;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per sphere instance (wire format — never changes).
pub const SPHERE_FLOATS: usize = 8;

/// Floats per path vertex: x, y, z (wire format — never changes).
pub const PATH_VERTEX_FLOATS: usize = 3;

/// Floats per point sprite: x, y, z, size (wire format — never changes).
pub const POINT_FLOATS: usize = 4;

/// Floats per game event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout derived from the game's capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum sphere instances.
    pub max_spheres: usize,
    /// Maximum path vertices.
    pub max_path_vertices: usize,
    /// Maximum point sprites.
    pub max_points: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of sphere data section in floats.
    pub sphere_data_floats: usize,
    /// Size of path data section in floats.
    pub path_data_floats: usize,
    /// Size of point data section in floats.
    pub point_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where sphere data begins.
    pub sphere_data_offset: usize,
    /// Offset (in floats) where path data begins.
    pub path_data_offset: usize,
    /// Offset (in floats) where point data begins.
    pub point_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_spheres: usize,
        max_path_vertices: usize,
        max_points: usize,
        max_events: usize,
    ) -> Self {
        let sphere_data_floats = max_spheres * SPHERE_FLOATS;
        let path_data_floats = max_path_vertices * PATH_VERTEX_FLOATS;
        let point_data_floats = max_points * POINT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let sphere_data_offset = HEADER_FLOATS;
        let path_data_offset = sphere_data_offset + sphere_data_floats;
        let point_data_offset = path_data_offset + path_data_floats;
        let event_data_offset = point_data_offset + point_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_spheres,
            max_path_vertices,
            max_points,
            max_events,
            sphere_data_floats,
            path_data_floats,
            point_data_floats,
            event_data_floats,
            sphere_data_offset,
            path_data_offset,
            point_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_spheres,
            config.max_path_vertices,
            config.max_points,
            config.max_events,
        )
    }
}
