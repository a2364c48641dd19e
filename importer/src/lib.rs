//! Parsing of exported match-result sheets.
//!
//! A sheet is plain comma separated text describing any number of games of a
//! tournament. The rows carry no type tag: a row starting with an empty field
//! is either a game header or a medal row depending on the previous row, every
//! other row is a player scoreboard line. [`parse`] turns a whole sheet into
//! typed [`GameRecord`]s without touching any storage.

pub mod record;
pub mod segment;

pub use record::{GameRecord, MedalLine, PlayerLine, RecordError, Side};
pub use segment::{RawBlock, SegmentError, Segmenter};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("sheet is not valid utf-8 text")]
    NotText,
    #[error(transparent)]
    Format(#[from] SegmentError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Parses a whole result sheet into its game records.
///
/// The entire input is classified before any record is handed out, so a
/// malformed sheet fails as a unit.
#[tracing::instrument(skip(input))]
pub fn parse(input: &[u8]) -> Result<Vec<GameRecord>, ParseError> {
    let text = core::str::from_utf8(input).map_err(|_| ParseError::NotText)?;

    let mut segmenter = Segmenter::new();
    let mut games = Vec::new();
    for line in text.lines() {
        if let Some(block) = segmenter.push(segment::split_line(line)) {
            games.push(record::build_record(block)?);
        }
    }
    if let Some(block) = segmenter.finish()? {
        games.push(record::build_record(block)?);
    }

    tracing::debug!("Parsed {} games", games.len());

    Ok(games)
}
