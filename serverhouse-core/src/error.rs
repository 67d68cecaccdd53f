//! Renderer error types.

use crate::BackendKind;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("{kind} rendering context unavailable")]
    ContextUnavailable { kind: BackendKind },

    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("shader program failed to link: {0}")]
    ProgramLink(String),

    #[error("failed to allocate {0}")]
    ResourceAllocation(&'static str),

    #[error("room type {0} is out of range (expected 0..=5)")]
    InvalidRoomType(i64),

    #[error("invalid renderer options: {0}")]
    InvalidOptions(String),

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::InvalidOptions(e.to_string())
    }
}
