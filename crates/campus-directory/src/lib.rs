//! Campus Directory - privileged operation handlers
//!
//! Every privileged operation follows the same shape: verify the
//! credential, ask the access gate for a decision with the operation's
//! capability, perform the mutation through the storage seam, and report
//! the fact to the accountability recorder. A deny short-circuits with no
//! state change and no audit write.
//!
//! Storage is a trait seam: uniqueness (usernames, event registrations)
//! and ownership-scoped deletes are enforced inside the store, atomically,
//! so there is no window between an ownership check and the mutation.
//! Password hashing is likewise a seam; the bundled [`password::Sha256Hasher`]
//! is a stand-in for an external KDF, not a production hasher.

#![forbid(unsafe_code)]

/// Directory storage seam
pub mod store;

/// In-memory directory
pub mod memory;

/// Password hashing seam
pub mod password;

/// The operation handlers
pub mod service;

pub use memory::MemoryDirectory;
pub use password::{PasswordHasher, Sha256Hasher};
pub use service::CampusService;
pub use store::{DirectoryStore, Event, NewPrincipal, UserSummary};
