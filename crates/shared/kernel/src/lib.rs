//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it hosts the identifier codec and the
//! settings loader that feature slices build on.
//!
//! ## Identifier decoding
//! ```rust
//! use tradepost_kernel::codec;
//!
//! let marker = codec::parse("ink_sack:10", ":").unwrap();
//! assert_eq!(marker.to_string(), "ink_sack:10");
//! ```
//!
//! ## Settings loading
//! ```rust,ignore
//! use tradepost_kernel::config::load_settings_file;
//!
//! let settings = load_settings_file(Some("plugins/tradepost/config")).unwrap();
//! ```

pub mod codec;
pub mod config;

pub use tradepost_domain as domain;
