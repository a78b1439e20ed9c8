#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

pub mod catalog;
pub mod favorites;

pub use catalog::InMemoryRecipeCatalog;
pub use favorites::InMemoryFavoritesStore;
