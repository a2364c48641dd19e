//! Grouping the untagged row stream into per-game blocks.

/// Field separator of a result sheet. There is no quoting or escaping.
pub const DELIMITER: char = ',';

/// Splits one line of the sheet into its raw fields.
///
/// Empty trailing fields are preserved and internal whitespace is left
/// untouched.
pub fn split_line(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split(DELIMITER).map(str::to_owned).collect()
}

/// One game's worth of raw rows, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// The header row, missing when player rows appeared before any header.
    pub header: Option<Vec<String>>,
    pub medal_rows: Vec<Vec<String>>,
    pub player_rows: Vec<Vec<String>>,
    /// 1-based line number of the first row belonging to this block.
    pub first_line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("game header on line {line} has no player rows")]
    EmptyGame { line: usize },
}

/// Stateful classifier reconstructing game boundaries from the row stream.
///
/// A row whose first field is empty starts a new game, unless the previous
/// row also started blank, in which case it is a medal row of the current
/// game. Every row with a non-empty first field is a player row.
pub struct Segmenter {
    prev_started_blank: bool,
    header: Option<Vec<String>>,
    medal_rows: Vec<Vec<String>>,
    player_rows: Vec<Vec<String>>,
    line: usize,
    block_start: usize,
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            prev_started_blank: false,
            header: None,
            medal_rows: Vec::new(),
            player_rows: Vec::new(),
            line: 0,
            block_start: 1,
        }
    }

    /// Feeds one tokenized row, returning the finished previous block when
    /// this row starts a new game.
    pub fn push(&mut self, row: Vec<String>) -> Option<RawBlock> {
        self.line += 1;

        let starts_blank = row.first().map(|field| field.is_empty()).unwrap_or(true);

        if starts_blank && !self.prev_started_blank {
            let finished = self.take_block();
            self.header = Some(row);
            self.block_start = self.line;
            self.prev_started_blank = true;
            finished
        } else if starts_blank {
            self.medal_rows.push(row);
            None
        } else {
            self.player_rows.push(row);
            self.prev_started_blank = false;
            None
        }
    }

    /// Flushes the final buffered block at end of input.
    ///
    /// A header without a single player row only ever shows up here: in the
    /// middle of the stream a new header is always preceded by a player row.
    pub fn finish(mut self) -> Result<Option<RawBlock>, SegmentError> {
        match self.take_block() {
            Some(block) if block.header.is_some() && block.player_rows.is_empty() => {
                Err(SegmentError::EmptyGame {
                    line: block.first_line,
                })
            }
            other => Ok(other),
        }
    }

    fn take_block(&mut self) -> Option<RawBlock> {
        if self.header.is_none() && self.player_rows.is_empty() && self.medal_rows.is_empty() {
            return None;
        }

        Some(RawBlock {
            header: self.header.take(),
            medal_rows: std::mem::take(&mut self.medal_rows),
            player_rows: std::mem::take(&mut self.player_rows),
            first_line: self.block_start,
        })
    }
}

/// Runs the [`Segmenter`] over an already tokenized row sequence.
pub fn segment<I>(rows: I) -> Result<Vec<RawBlock>, SegmentError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut segmenter = Segmenter::new();
    let mut blocks = Vec::new();
    for row in rows {
        if let Some(block) = segmenter.push(row) {
            blocks.push(block);
        }
    }
    if let Some(block) = segmenter.finish()? {
        blocks.push(block);
    }
    Ok(blocks)
}
