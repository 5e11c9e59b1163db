//! Candidate processing
//!
//! The host hands the processor an ordered sequence of blank-line-delimited
//! blocks starting at a candidate position. The processor runs the full
//! pass (extent → classification → list decoding → aggregates → render)
//! and reports how many leading blocks the table consumed; zero means "not
//! a table, leave the text untouched". Classified failures never escape:
//! they become a diagnostic on the injected sink when verbose is set.

use crate::columns::aggregate::evaluate;
use crate::columns::classify::classify;
use crate::columns::error::TableError;
use crate::columns::extent::find_extent;
use crate::columns::lists::decode_lists;
use crate::columns::model::Table;
use crate::columns::render::{render_table, Element};
use std::io::{self, Write};

/// Stylesheet handling for the surrounding document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    /// Emit the built-in `<style>` block once before the first table.
    Default,
    /// Emit no styling at all.
    Bare,
    /// Emit a `<link rel="stylesheet">` to the given path.
    Path(String),
}

/// Read-only configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Indent at or past which a leftmost column reads as a code block.
    pub code_indent: usize,
    /// Emit a diagnostic on the sink when a candidate is rejected.
    pub verbose: bool,
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            code_indent: 4,
            verbose: false,
            style: Style::Default,
        }
    }
}

/// Detects tables in candidate blocks and appends rendered fragments to a
/// caller-supplied parent element.
pub struct ColumnsProcessor {
    config: Config,
    sink: Box<dyn Write>,
}

impl ColumnsProcessor {
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Box::new(io::stderr()))
    }

    /// Use an explicit diagnostic sink instead of stderr.
    pub fn with_sink(config: Config, sink: Box<dyn Write>) -> Self {
        ColumnsProcessor { config, sink }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Try the candidate starting at `blocks[0]`. On success the rendered
    /// fragment is appended to `parent` and the number of consumed blocks
    /// is returned; on any classified failure nothing is appended and zero
    /// is returned.
    pub fn process(&mut self, blocks: &[Vec<String>], parent: &mut Element) -> usize {
        match self.build(blocks) {
            Ok((consumed, table)) => {
                parent.append(render_table(&table));
                consumed
            }
            Err(err) => {
                self.diagnose(&err);
                0
            }
        }
    }

    /// Run the detection pass and return the finished table model without
    /// rendering it. The CLI's json output uses this.
    pub fn build(&self, blocks: &[Vec<String>]) -> Result<(usize, Table), TableError> {
        let extent = find_extent(blocks, self.config.code_indent)?;
        let mut table = classify(&extent.lines, &extent.spans)?;
        decode_lists(&mut table);
        evaluate(&mut table)?;
        Ok((extent.blocks_consumed, table))
    }

    fn diagnose(&mut self, err: &TableError) {
        if self.config.verbose {
            let _ = writeln!(self.sink, "columns: not a table: {}", err);
        }
    }
}
