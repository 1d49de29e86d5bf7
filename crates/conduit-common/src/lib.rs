pub mod error;
pub mod limits;
pub mod types;

// Re-export commonly used items
pub use error::{ProtocolError, ProtocolResult};
pub use types::{BlockPos, Vec3};
