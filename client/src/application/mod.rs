// Application layer - use cases over the saved-challenges state
// Orchestrates domain logic, depends on domain layer only

pub mod commands;
pub mod errors;
pub mod ports;
pub mod state;

pub use errors::ApplicationError;
pub use state::SaveStateStore;
