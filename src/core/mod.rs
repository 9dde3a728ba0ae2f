pub mod apply;
pub mod describe;
pub mod engine;
pub mod group;
pub mod parse;
pub mod prompt;
pub mod validate;

pub use engine::FillEngine;
