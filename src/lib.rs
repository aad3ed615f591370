//! Core logic for the Mosaic progressive tile viewer.
//!
//! A navigation thumbnail drives a larger viewport whose image is
//! assembled on the fly from binary blocks delivered by an external
//! prediction/caching engine. The crate owns the query mapping, the block
//! wire codec, the contiguous-prefix assembly, and the per-session state;
//! the engine and the rendering surface stay behind the traits in
//! [`engine`].

pub mod assemble;
pub mod block;
pub mod config;
pub mod engine;
pub mod error;
pub mod gallery;
pub mod io_utils;
pub mod manifest;
pub mod query;
pub mod session;
pub mod stats;

pub use assemble::{assemble, scan_stream, Assembly, BlockSet};
pub use block::{decode_block, encode_block, Block, BLOCK_HEADER_SIZE};
pub use config::Config;
pub use engine::{App, Deliver, Frame, PredictionEngine, RenderSink};
pub use error::MosaicError;
pub use gallery::Gallery;
pub use manifest::TileManifest;
pub use query::{decode_key, Layout, Query};
pub use session::Session;
pub use stats::QueryStats;
