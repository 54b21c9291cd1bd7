//! CLI command implementations.

pub(crate) mod config;
pub(crate) mod render;

pub(crate) use config::ConfigArgs;
pub(crate) use render::RenderArgs;
