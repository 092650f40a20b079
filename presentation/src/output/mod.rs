//! Reply output handling

pub mod reply;

pub use reply::{MAX_CHUNK_CHARS, print_chunked, split_chunks};
