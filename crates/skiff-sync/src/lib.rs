//! Jib sync-map extraction for skiff.
//!
//! # Extraction pipeline
//!
//! ```text
//! skiff sync
//!   1. Build     ── mvn jib:_skaffold-sync-map / gradle _jibSkaffoldSyncMap
//!   2. Extract   ── scan output for the BEGIN JIB JSON marker line
//!   3. Normalize ── double unescaped backslashes in the payload
//!   4. Decode    ── serde_json into direct/generated wire entries
//!   5. Resolve   ── stat each src, direct first, last write wins
//! ```
//!
//! The resulting [`SyncMap`] tells a file-sync engine which local files
//! feed which container paths and how fresh each source was at extraction
//! time. Deciding whether to sync or rebuild, and the copying itself, are
//! the caller's business.

pub mod client;
pub mod executor;
pub mod extract;
pub mod normalize;
pub mod syncmap;
pub mod tool;

pub use client::{CheckResult, DoctorReport, JibClient, SyncError};
pub use executor::{BuildExecutor, RealExecutor};
pub use extract::ExtractError;
pub use syncmap::{SyncEntry, SyncMap, SyncMapError};
pub use tool::ToolError;
