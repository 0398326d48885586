// src/images/mod.rs
// =============================================================================
// Image naming and storage.
//
// Submodules:
// - sanitize: Turns an image URL into a safe local file name
// - store: Streams image bytes into the output directory
// =============================================================================

mod sanitize;
mod store;

pub use sanitize::sanitize_filename;
pub use store::ImageStore;
