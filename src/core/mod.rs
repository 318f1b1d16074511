pub mod module;

pub use module::{ModuleGraph, ModuleId, ModuleNode};
