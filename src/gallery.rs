//! The gallery viewer: navigation thumbnail driving a progressively
//! assembled large view.

use serde_json::json;

use crate::assemble::{assemble, BlockSet};
use crate::config::Config;
use crate::engine::{App, Frame, PredictionEngine, RenderSink};
use crate::query::{decode_key, Layout, Query};
use crate::session::Session;
use crate::stats::{status_line, QueryStats};
use crate::MosaicError;

pub const APP_NAME: &str = "Gallery";

pub struct Gallery {
    config: Config,
    layout: Layout,
    session: Session,
    stats: QueryStats,
    /// Print the utility status line on each delivery.
    pub report_progress: bool,
}

impl Gallery {
    pub fn new(config: Config) -> Result<Gallery, MosaicError> {
        config.validate()?;
        let layout = Layout::new(config.tile_dimension, config.factor);
        Ok(Gallery {
            config,
            layout,
            session: Session::new(),
            stats: QueryStats::new(),
            report_progress: false,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn stats(&self) -> &QueryStats {
        &self.stats
    }

    /// Flip the pointer-follow toggle.
    pub fn toggle_move(&mut self) -> bool {
        self.session.toggle_move()
    }

    /// Handle a pointer move over the navigation surface.
    ///
    /// Maps the position to a grid query and dispatches it unless the
    /// pointer-follow toggle is off, the position is outside the grid, or
    /// the query equals the previous one. Returns whether a dispatch
    /// happened.
    pub fn pointer_moved<E, S>(
        &mut self,
        engine: &mut E,
        sink: &mut S,
        x: f64,
        y: f64,
    ) -> Result<bool, MosaicError>
    where
        E: PredictionEngine + ?Sized,
        S: RenderSink + ?Sized,
    {
        self.session.track_pointer(x, y);
        if !self.session.move_enabled() {
            return Ok(false);
        }
        let Some(query) = self.layout.query_at(x, y) else {
            return Ok(false);
        };
        self.dispatch(engine, sink, query)
    }

    /// Dispatch `query` through the de-duplication gate.
    pub fn dispatch<E, S>(
        &mut self,
        engine: &mut E,
        sink: &mut S,
        query: Query,
    ) -> Result<bool, MosaicError>
    where
        E: PredictionEngine + ?Sized,
        S: RenderSink + ?Sized,
    {
        if !self.session.should_dispatch(query) {
            return Ok(false);
        }
        let seq = self.session.next_seq();
        let key = query.key();
        engine.register_query(
            key.as_str(),
            Box::new(|blocks, nblocks| {
                self.deliver(sink, &key, seq, blocks, nblocks);
            }),
        )?;
        Ok(true)
    }

    /// Handle one engine response: assemble, record stats, and render
    /// unless a later response has already been displayed.
    pub fn deliver<S>(
        &mut self,
        sink: &mut S,
        key: &str,
        seq: u64,
        blocks: &BlockSet,
        nblocks: usize,
    ) where
        S: RenderSink + ?Sized,
    {
        let assembly = assemble(blocks, nblocks);
        self.stats.observe(key, assembly.assembled_count, nblocks);
        if self.report_progress {
            eprintln!("{}", status_line(key, assembly.assembled_count, nblocks));
        }
        if !self.session.accept_response(seq) {
            return;
        }
        sink.render(Frame {
            buffer: assembly.buffer,
            assembled: assembly.assembled_count,
            expected: nblocks,
            seq,
        });
    }
}

impl App for Gallery {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn state(&self) -> serde_json::Value {
        json!({
            "appname": APP_NAME,
            "cachesize": self.config.cachesize,
            "state": {
                "dbname": self.config.dbname,
                "factor": self.config.factor,
                "dimension": self.config.tile_dimension,
            },
        })
    }

    fn on_open(&mut self, _data: &str) {
        // The engine is live; start from a clean session.
        self.session.reset();
    }

    fn decode_key(&self, key: &str) -> Result<Query, MosaicError> {
        decode_key(key)
    }
}
