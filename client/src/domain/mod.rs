// Domain layer - saved set, challenge listing, resources
// No dependencies on other layers

pub mod aggregates;
pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use aggregates::*;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
