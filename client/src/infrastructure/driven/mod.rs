// Output adapters (hosted REST backend, in-memory backend)

pub mod in_memory;
pub mod postgrest;

pub use in_memory::{FailureMode, InMemoryBackend};
pub use postgrest::PostgrestClient;
