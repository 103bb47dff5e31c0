pub mod firestore;
pub mod identity;
pub mod memory;
pub mod net;
pub mod session;

// Re-exports for convenience
pub use firestore::{FirestoreClient, FirestoreError};
pub use identity::{IdentityAccount, IdentityClient, IdentityError};
pub use memory::{MemoryBackend, MemoryError};
pub use net::{http_client, NetError};
pub use session::{Session, SessionCell};
