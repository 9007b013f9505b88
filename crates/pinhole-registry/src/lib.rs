//! In-memory registry service for the pinhole link registry.
//!
//! Provides [`InMemoryRegistry`], the single-writer append-only store
//! behind the [`Registry`](pinhole_core::Registry) trait.

pub mod memory;

pub use memory::InMemoryRegistry;
