pub mod schemas;
pub mod types;

pub use schemas::*;
pub use types::{Docs, ResourceUnit, ScalarKind, TypeExpr};
