//! The rendering trait and context for turning the select AST into
//! query text.

use model::config::JoinSeparator;

pub mod select;

/// A trait for any AST node that can be rendered into query text.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates the query string during rendering.
///
/// A renderer is created per build call and consumed by `finish`, so
/// no text survives between builds.
pub struct Renderer {
    pub sql: String,
    join_separator: JoinSeparator,
}

impl Renderer {
    pub fn new(join_separator: JoinSeparator) -> Self {
        Self {
            sql: String::new(),
            join_separator,
        }
    }

    /// Consumes the renderer and returns the final query string.
    pub fn finish(self) -> String {
        self.sql
    }

    pub(crate) fn push_join_separator(&mut self) {
        self.sql.push_str(self.join_separator.as_str());
    }
}
