//! Model layer
//!
//! Resource type identifiers and the Fluid CRD coordinates used by collectors.

pub mod fluid;
mod resource_type;

pub use fluid::RuntimeKind;
pub use resource_type::ResourceType;
