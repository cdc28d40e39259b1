//! Configuration types for lively-dds components.
//!
//! # Example
//!
//! ```
//! use lively_dds::config::TextureConfig;
//! use lively_dds::dds::DdsFormat;
//!
//! let texture_config = TextureConfig::new(DdsFormat::BC1).with_max_dimension(4096);
//! assert_eq!(texture_config.format(), DdsFormat::BC1);
//! assert_eq!(texture_config.max_dimension(), 4096);
//! ```

mod texture;

pub use texture::{TextureConfig, DEFAULT_FORMAT, DEFAULT_MAX_DIMENSION};
