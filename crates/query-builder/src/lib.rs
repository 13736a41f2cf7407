use crate::render::{Render, Renderer};
use model::{config::QueryConfig, error::ConfigError};

pub mod ast;
pub mod naming;
pub mod plan;
pub mod render;

/// Builds the full query string for a configuration: plan the select
/// AST, then render it.
pub fn build_query(config: &QueryConfig) -> Result<String, ConfigError> {
    let select = plan::plan(config)?;
    let mut renderer = Renderer::new(config.join_separator);
    select.render(&mut renderer);
    Ok(renderer.finish())
}
