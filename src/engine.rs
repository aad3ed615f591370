//! Seams between the viewer core and its collaborators.
//!
//! The prediction/caching engine and the rendering surface both live
//! outside this crate; the viewer only ever talks to them through the
//! traits below.

use crate::{BlockSet, MosaicError, Query};

/// Completion callback handed to the engine with each dispatched query.
///
/// Invoked with the block set received so far and the expected total block
/// count once data is available.
pub type Deliver<'a> = Box<dyn FnOnce(&BlockSet, usize) + 'a>;

/// The external prediction/caching engine, seen from the viewer.
///
/// The engine owns dispatch scheduling, caching and retries. A dispatch
/// refused outright surfaces as [`MosaicError::QueryFailed`]; the viewer
/// reports it upward and never retries on its own.
pub trait PredictionEngine {
    fn register_query(&mut self, key: &str, deliver: Deliver<'_>) -> Result<(), MosaicError>;
}

/// Capability set a visualization front-end exposes to the engine.
///
/// Variants of this trait are different front-ends; the gallery viewer is
/// the one implemented in this crate.
pub trait App {
    fn app_name(&self) -> &str;

    /// Handshake state the engine receives on connection.
    fn state(&self) -> serde_json::Value;

    /// Engine-open notification carrying opaque engine data.
    fn on_open(&mut self, data: &str);

    /// Parse a wire key back into a query.
    fn decode_key(&self, key: &str) -> Result<Query, MosaicError>;
}

/// One displayable result handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Assembled image bytes; empty for the placeholder state.
    pub buffer: Vec<u8>,
    /// Contiguous blocks that went into `buffer`.
    pub assembled: usize,
    /// Expected total block count for the query.
    pub expected: usize,
    /// Dispatch sequence this frame answers.
    pub seq: u64,
}

/// The rendering surface, seen from the viewer.
///
/// Frames arrive in last-render-wins order. The sink owns each frame's
/// buffer and is responsible for releasing any temporary display handle
/// once the frame is superseded or unmounted.
pub trait RenderSink {
    fn render(&mut self, frame: Frame);
}
