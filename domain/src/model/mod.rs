//! Model registry domain: descriptors and the fixed backend table

pub mod descriptor;
pub mod registry;

pub use descriptor::ModelDescriptor;
pub use registry::ModelRegistry;
