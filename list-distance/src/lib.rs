use std::io::{self, Read, Write};

use tracing_subscriber::{filter::LevelFilter, fmt::format::FmtSpan, EnvFilter};

use crate::error::DistanceError;

pub mod error;
pub mod lists;
pub mod parser;
pub mod part1;
pub mod part2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Total distance between the sorted columns.
    One,
    /// Similarity score of the left column against the right.
    Two,
}

impl Part {
    pub fn process(self, input: &str) -> miette::Result<String> {
        match self {
            Part::One => part1::process(input),
            Part::Two => part2::process(input),
        }
    }
}

/// Reads all of `reader`, then writes the answer for `part` as a single line.
#[tracing::instrument(skip(reader, writer))]
pub fn run<R: Read, W: Write>(part: Part, reader: R, mut writer: W) -> miette::Result<()> {
    let input = io::read_to_string(reader).map_err(DistanceError::ReadInput)?;
    let answer = part.process(&input)?;

    writeln!(writer, "{answer}").map_err(DistanceError::WriteOutput)?;
    writer.flush().map_err(DistanceError::WriteOutput)?;
    Ok(())
}

/// Logs go to stderr so stdout only ever carries the answer. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr)
        .try_init();
}
