pub mod ids;
pub mod contact;
pub mod search;

// Re-exports for convenience
pub use ids::ContactId;
pub use contact::{ContactRecord, ContactRow};
pub use search::{InclusionMode, SearchSpec};
