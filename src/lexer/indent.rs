//! Indentation normalization.
//!
//! Gee delimits blocks by indentation. Before tokenizing, every source line is
//! rewritten so that block structure is explicit: a line indented deeper than
//! the enclosing block is prefixed with [`BLOCK_START`], a line that closes
//! blocks is prefixed with one [`BLOCK_END`] per closed level, and every
//! statement line gets a trailing [`STATEMENT_END`].

use tracing::trace;

pub const COMMENT: char = '#';
pub const BLOCK_START: char = '@';
pub const BLOCK_END: char = '~';
pub const STATEMENT_END: char = ';';

/// One normalized line, remembering where it came from so tokens can be
/// reported in source coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the original source.
    pub number: u32,
    /// Leading whitespace bytes removed from the source line.
    pub offset: usize,
    /// Number of synthetic markers prefixed to `text`.
    pub markers: usize,
    pub text: String,
}

impl SourceLine {
    /// Maps a byte offset into `text` back to a column in the source line.
    /// Synthetic markers map to the first non-blank column.
    pub fn source_column(&self, offset: usize) -> usize {
        if offset < self.markers {
            self.offset
        } else {
            self.offset + offset - self.markers
        }
    }
}

/// Counts leading spaces. Tabs are not indentation.
fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Rewrites raw source into normalized lines.
///
/// Blank and comment-only lines are dropped. Dedenting to a level that was
/// never pushed closes every level deeper than it, so it lands on the nearest
/// enclosing block instead of failing.
pub fn normalize(source: &str) -> Vec<SourceLine> {
    let mut lines = vec![];
    let mut levels: Vec<usize> = vec![0];
    let mut last_number = 0;

    for (index, raw) in source.lines().enumerate() {
        let number = index as u32 + 1;
        last_number = number;

        let line = strip_comment(raw).trim_end();
        let body = line.trim_start();
        if body.is_empty() {
            continue;
        }

        let indent = indentation(line);
        let mut text = String::new();
        let mut markers = 0;

        if indent > *levels.last().unwrap_or(&0) {
            levels.push(indent);
            text.push(BLOCK_START);
            markers += 1;
        } else {
            while levels.len() > 1 && indent < *levels.last().unwrap_or(&0) {
                levels.pop();
                text.push(BLOCK_END);
                markers += 1;
            }
        }

        text.push_str(body);
        text.push(STATEMENT_END);
        trace!(line = number, text = %text, "normalized");

        lines.push(SourceLine {
            number,
            offset: line.len() - body.len(),
            markers,
            text,
        });
    }

    let open = levels.len() - 1;
    if open > 0 {
        lines.push(SourceLine {
            number: last_number + 1,
            offset: 0,
            markers: open,
            text: BLOCK_END.to_string().repeat(open),
        });
    }

    lines
}

/// Joins normalized lines into the single marker-annotated string.
pub fn render(lines: &[SourceLine]) -> String {
    lines.iter().map(|line| line.text.as_str()).collect()
}
