//! Sales transaction aggregation engine.
//!
//! Takes an in-memory collection of transaction records and produces the
//! named summary tables a dashboard renders: revenue and sales volume by
//! state, month and category, plus per-seller statistics. Ingestion from
//! the upstream feed export lives in [`data`], the aggregation pipeline
//! in [`engine`], terminal/JSON rendering in [`output`].

pub mod data;
pub mod engine;
pub mod error;
pub mod output;
pub mod utils;
