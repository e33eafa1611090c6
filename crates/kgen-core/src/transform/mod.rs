pub mod docs;
pub mod naming;
pub mod resource;
pub mod scheduler;
pub mod type_emitter;
pub mod type_mapper;
pub mod union;

pub use resource::ResourceEmitter;
pub use scheduler::EmissionScheduler;
pub use type_mapper::{DeferredType, TypeMapper};
