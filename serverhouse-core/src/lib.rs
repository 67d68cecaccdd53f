pub mod backend;
pub mod camera;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod flow;
pub mod layout;
pub mod mesh;
pub mod options;
pub mod particles;
pub mod points;
pub mod room;
pub mod scene;
pub mod surface;

pub use backend::{
    BackendFactory, BackendKind, FrameParams, HostState, RendererBackend, RendererHost,
};
pub use camera::{model_view_matrix, normal_matrix, projection_matrix, CameraUniforms};
pub use color::Color;
pub use config::{get_room_config, RoomConfig, ROOM_CONFIGS};
pub use draw::{
    draw_circuit_board, draw_data_flow, draw_server_rack, DrawCommand, DrawList, RandomSource,
};
pub use error::{RenderError, ShaderStage};
pub use flow::{flow_path, path_length};
pub use layout::{room_layout, LayoutElement};
pub use mesh::CubeMesh;
pub use options::RendererOptions;
pub use particles::{Particle, ParticleField};
pub use points::{Point, Rect};
pub use room::RoomType;
pub use scene::RoomScene;
pub use surface::SurfaceSize;
