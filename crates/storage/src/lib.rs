//! Storage abstractions for league-media services.
//!
//! Provides unified interfaces for:
//! - Expiring preview pointers (Redis or in-process)
//! - Rendered artifact files (local upload directory via `object_store`)
//! - A YAML content catalog implementing the repository traits

pub mod cache;
pub mod catalog;
pub mod memory_cache;
pub mod object_store;

pub use self::object_store::ArtifactStore;
pub use cache::{PointerStore, RedisPointerStore, DEFAULT_PREFIX, PREVIEW_TTL};
pub use catalog::YamlCatalog;
pub use memory_cache::MemoryPointerStore;
