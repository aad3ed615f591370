//! Per-query delivery statistics.
//!
//! Records how many blocks were already in place when a query's first
//! response arrived and how far assembly progressed over time. The JSON
//! form is the log consumed by the offline analysis tooling; the CSV
//! export feeds the same pipeline.

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::MosaicError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Contiguous blocks already available at the first delivery
    /// (i.e. how much the engine had prefetched).
    pub start_nblocks: usize,
    /// Expected total block count for the query.
    pub total_nblocks: usize,
    /// Number of deliveries observed.
    pub deliveries: u64,
    /// Highest contiguous block count seen so far.
    pub max_assembled: usize,
}

/// Accumulates one [`QueryRecord`] per query key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStats {
    records: BTreeMap<String, QueryRecord>,
}

impl QueryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one delivery for `key`.
    pub fn observe(&mut self, key: &str, assembled: usize, expected: usize) {
        let record = self.records.entry(key.to_string()).or_default();
        if record.deliveries == 0 {
            record.start_nblocks = assembled;
        }
        record.total_nblocks = expected;
        record.deliveries += 1;
        record.max_assembled = record.max_assembled.max(assembled);
    }

    pub fn get(&self, key: &str) -> Option<&QueryRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_json(&self) -> Result<String, MosaicError> {
        serde_json::to_string_pretty(&self.records)
            .map_err(|e| MosaicError::Internal(format!("stats serialization: {e}")))
    }

    pub fn from_json(data: &str) -> Result<Self, MosaicError> {
        let records = serde_json::from_str(data)
            .map_err(|e| MosaicError::Internal(format!("stats log: {e}")))?;
        Ok(Self { records })
    }

    /// Write one CSV row per query.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), MosaicError> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(["query", "start_nblocks", "total_nblocks", "deliveries", "max_assembled"])
            .map_err(|e| MosaicError::Internal(format!("csv: {e}")))?;
        for (key, record) in &self.records {
            out.write_record([
                key.as_str(),
                &record.start_nblocks.to_string(),
                &record.total_nblocks.to_string(),
                &record.deliveries.to_string(),
                &record.max_assembled.to_string(),
            ])
            .map_err(|e| MosaicError::Internal(format!("csv: {e}")))?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Status line shown for each delivery on the utility display.
pub fn status_line(key: &str, assembled: usize, expected: usize) -> String {
    format!("{key} has {assembled} blocks out of {expected}")
}
