//! Room registry and visual constants.
//!
//! Every number the two backends agree on lives here: rack geometry and
//! palette for the Canvas2D path, camera and lighting for the WebGL2 path.

use crate::{Color, RoomType};

// =============================================================================
// Server racks
// =============================================================================

/// Horizontal unit slots per rack.
pub const RACK_UNITS: usize = 8;
/// Ventilation tick marks per unit slot.
pub const VENT_TICKS: usize = 4;
pub const LED_RADIUS: f64 = 2.0;
/// Horizontal distance between the centres of neighbouring LEDs.
pub const LED_SPACING: f64 = 8.0;

pub const LED_GREEN: Color = Color::rgb(0x10, 0xb9, 0x81);
pub const LED_AMBER: Color = Color::rgb(0xf5, 0x9e, 0x0b);
pub const LED_RED: Color = Color::rgb(0xef, 0x44, 0x44);
/// LED colours of a powered rack, left to right.
pub const LED_COLORS: [Color; 3] = [LED_GREEN, LED_AMBER, LED_RED];
pub const LED_IDLE: Color = Color::rgb(0x37, 0x41, 0x51);

pub const RACK_FRAME_ACTIVE: Color = Color::rgb(0x1e, 0x29, 0x3b);
pub const RACK_FRAME_IDLE: Color = Color::rgb(0x0f, 0x17, 0x2a);
pub const RACK_UNIT_ACTIVE: Color = Color::rgb(0x33, 0x41, 0x55);
pub const RACK_UNIT_IDLE: Color = Color::rgb(0x1e, 0x29, 0x3b);
pub const VENT_ACTIVE: Color = Color::rgb(0x64, 0x74, 0x8b);
pub const VENT_IDLE: Color = Color::rgb(0x37, 0x41, 0x51);
pub const POWER_BAR: Color = LED_GREEN;

// =============================================================================
// Data flow and circuit backdrop
// =============================================================================

pub const DATA_FLOW_BLUE: Color = Color::rgb(0x3b, 0x82, 0xf6);
pub const DATA_FLOW_WIDTH: f64 = 2.0;
pub const DATA_FLOW_GLOW: f64 = 10.0;

pub const CIRCUIT_GRID_SIZE: f64 = 20.0;
pub const CIRCUIT_TRACE: Color = Color::rgb(0x1e, 0x29, 0x3b);
pub const CIRCUIT_NODE: Color = DATA_FLOW_BLUE;
/// Density of the backdrop drawn behind every Canvas2D room.
pub const BACKDROP_DENSITY: f64 = 0.2;

// =============================================================================
// Particles
// =============================================================================

pub const MAX_PARTICLES: usize = 48;
/// Frames a particle lives for.
pub const PARTICLE_LIFETIME: f64 = 90.0;
pub const PARTICLE_RADIUS: f64 = 2.0;

// =============================================================================
// WebGL2 camera and lighting
// =============================================================================

pub const FOV_DEGREES: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;
/// The cube sits this far in front of the camera, along -Z.
pub const CAMERA_DISTANCE: f32 = 5.0;

pub const LIGHT_POSITION: [f32; 3] = [2.0, 2.0, 2.0];
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_COLOR: [f32; 3] = [0.1, 0.1, 0.2];
pub const SERVER_COLOR: [f32; 3] = [0.3, 0.3, 0.4];

/// Shader activity level for a powered room.
pub const ACTIVE_LEVEL: f32 = 1.0;
/// Shader activity level for an idle room.
pub const IDLE_LEVEL: f32 = 0.3;

// =============================================================================
// Room registry
// =============================================================================

/// Presentation metadata for a room section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomConfig {
    pub room: RoomType,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Whether the section asks for the WebGL2 backend.
    pub use_3d: bool,
    /// Whether the section starts powered.
    pub active_by_default: bool,
}

pub static ROOM_CONFIGS: [RoomConfig; 6] = [
    RoomConfig {
        room: RoomType::ServerRoom,
        title: "Main Server Room",
        subtitle: "Central Processing Hub",
        use_3d: true,
        active_by_default: true,
    },
    RoomConfig {
        room: RoomType::DatabaseRoom,
        title: "Database Room",
        subtitle: "Skills & Knowledge Storage",
        use_3d: false,
        active_by_default: true,
    },
    RoomConfig {
        room: RoomType::CodeLaboratory,
        title: "Code Laboratory",
        subtitle: "Experiments & Prototypes",
        use_3d: false,
        active_by_default: false,
    },
    RoomConfig {
        room: RoomType::ProjectWarehouse,
        title: "Project Warehouse",
        subtitle: "Shipped Work",
        use_3d: false,
        active_by_default: false,
    },
    RoomConfig {
        room: RoomType::CommunicationHub,
        title: "Communication Hub",
        subtitle: "Get In Touch",
        use_3d: false,
        active_by_default: true,
    },
    RoomConfig {
        room: RoomType::SystemStatus,
        title: "System Status",
        subtitle: "Experience & Metrics",
        use_3d: false,
        active_by_default: false,
    },
];

pub fn get_room_config(room: RoomType) -> &'static RoomConfig {
    &ROOM_CONFIGS[room.index() as usize]
}
