//! # m3u-groups-rs
//! A library for grouping and filtering extended m3u playlists by `group-title`
//!
//! # Example
//! ```rust
//! use m3u_groups_rs::{AllowList, Parser};
//! use std::io::Cursor;
//!
//! // 1. Parse
//! let mut parser = Parser::new(Cursor::new(r#"
//! #EXTM3U
//! #EXTINF:-1 group-title="Sports",Channel A
//! http://example.com/a
//! #EXTINF:-1 group-title="News",Channel B
//! http://example.com/b"#));
//! parser.parse().unwrap();
//! let playlist = parser.get_result();
//!
//! // 2. Filter
//! let filtered = playlist.filter(&AllowList::from_lines(["News"]));
//!
//! // 3. Generate
//! assert_eq!(
//!     filtered.to_string(),
//!     "#EXTM3U\n#EXTINF:-1 group-title=\"News\",Channel B\nhttp://example.com/b\n"
//! );
//! ```

mod allowlist;
mod builder;
mod export;
mod filter;
pub mod format;
mod parser;
pub use allowlist::*;
pub use builder::*;
pub use export::*;
pub use parser::*;
