//! Built-in pipeline phases.

mod parse;
mod render;
mod resolve;

pub use parse::ParsePhase;
pub use render::RenderPhase;
pub use resolve::ResolvePhase;
