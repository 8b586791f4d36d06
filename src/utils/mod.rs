//! Shared helpers: decoding, atomic writes, digests and display formatting.

pub mod encoding;
pub mod format;
pub mod fs;
pub mod hashing;

pub use encoding::decode_text;
pub use format::{escape_control, format_with_commas, truncate_to_width};
pub use fs::write_atomic;
pub use hashing::sha256_hex;
