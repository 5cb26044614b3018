//! First-table extraction from an HTML document.
//!
//! Walks the `html5ever` token stream once, front to back, with a small
//! state machine that only reacts to `table`, `tr` and `td`:
//!
//! ```text
//! OutsideTable --<table>--> InTable --<tr>--> InRow --<td>--> InCell
//!      ^                      |  ^              |  ^             |
//!      +-----</table>---------+  +----</tr>-----+  +----</td>----+
//! ```
//!
//! Every other tag is transparent: it changes no state, and character
//! data inside it still lands in the enclosing cell. Transitions not
//! drawn above are ignored, so stray or unbalanced end tags never fail
//! the scan. Once the first table closes the scanner stops listening.
//!
//! The bare tokenizer has no tree builder to switch it into raw-text
//! states, so the sink does that itself for `script`, `style` and friends.
//! Markup-looking text inside them is never read as tags.
//!
//! Complexity: O(n) in the document length.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use tracing::{debug, instrument};

use crate::error::Result;

/// One `<tr>`: trimmed cell texts in document order.
pub type Row = Vec<String>;

/// The rows of the first table in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Cell contents: `rows[row_idx][col_idx]`. Never contains an empty row.
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// `true` when no table (or no non-empty row) was found.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// First row, used for field resolution.
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Every row after the header.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Render this table as a GitHub-flavored markdown table.
    pub fn to_markdown(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let col_count = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if col_count == 0 {
            return String::new();
        }

        let mut md = String::new();
        push_markdown_row(&mut md, &self.rows[0], col_count);

        md.push('|');
        for _ in 0..col_count {
            md.push_str(" --- |");
        }
        md.push('\n');

        for row in self.data_rows() {
            push_markdown_row(&mut md, row, col_count);
        }

        md
    }
}

fn push_markdown_row(md: &mut String, row: &[String], col_count: usize) {
    md.push('|');
    for col in 0..col_count {
        let cell = row.get(col).map_or("", String::as_str);
        md.push(' ');
        md.push_str(cell);
        md.push_str(" |");
    }
    md.push('\n');
}

/// Scanner position relative to the first table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    OutsideTable,
    InTable,
    InRow,
    InCell,
    /// First table closed; all further tokens are ignored.
    Done,
}

/// The table/row/cell state machine, fed one token at a time.
#[derive(Debug)]
struct TableScanner {
    state: State,
    cell: String,
    row: Row,
    rows: Vec<Row>,
}

impl TableScanner {
    fn new() -> Self {
        Self {
            state: State::OutsideTable,
            cell: String::new(),
            row: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn start_tag(&mut self, name: &str) {
        self.state = match (self.state, name) {
            (State::OutsideTable, "table") => State::InTable,
            (State::InTable, "tr") => State::InRow,
            (State::InRow, "td") => {
                self.cell.clear();
                State::InCell
            }
            (state, _) => state,
        };
    }

    fn end_tag(&mut self, name: &str) {
        self.state = match (self.state, name) {
            (State::InCell, "td") => {
                self.row.push(self.cell.trim().to_string());
                self.cell.clear();
                State::InRow
            }
            (State::InRow, "tr") => {
                let row = std::mem::take(&mut self.row);
                if !row.is_empty() {
                    self.rows.push(row);
                }
                State::InTable
            }
            (State::InTable, "table") => State::Done,
            (state, _) => state,
        };
    }

    fn text(&mut self, data: &str) {
        if self.state == State::InCell {
            self.cell.push_str(data);
        }
    }

    fn finish(self) -> Table {
        Table::new(self.rows)
    }
}

/// Tokenizer state for elements whose content is text, not markup.
fn raw_kind(name: &str) -> Option<RawKind> {
    match name {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "title" | "textarea" => Some(RawKind::Rcdata),
        _ => None,
    }
}

/// Adapts [`TableScanner`] to the tokenizer's sink interface.
struct ScannerSink {
    scanner: RefCell<TableScanner>,
}

impl TokenSink for ScannerSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let mut scanner = self.scanner.borrow_mut();
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => {
                    scanner.start_tag(&tag.name);
                    if !tag.self_closing {
                        if let Some(kind) = raw_kind(&tag.name) {
                            return TokenSinkResult::RawData(kind);
                        }
                    }
                }
                TagKind::EndTag => scanner.end_tag(&tag.name),
            },
            Token::CharacterTokens(text) => scanner.text(&text),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Extract the rows of the first `<table>` in `html`.
///
/// Never fails: a document without a table yields an empty [`Table`].
#[instrument(skip(html), fields(bytes = html.len()))]
pub fn extract_first_table(html: &str) -> Table {
    let sink = ScannerSink {
        scanner: RefCell::new(TableScanner::new()),
    };
    let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());

    let queue = BufferQueue::default();
    queue.push_back(StrTendril::from_slice(html));
    let _ = tokenizer.feed(&queue);
    tokenizer.end();

    let table = tokenizer.sink.scanner.replace(TableScanner::new()).finish();
    debug!(rows = table.len(), "Extracted first table");
    table
}

/// Decode `bytes` as UTF-8, then [`extract_first_table`].
///
/// The only failure is undecodable input ([`crate::GridError::Parse`]).
pub fn extract_first_table_bytes(bytes: &[u8]) -> Result<Table> {
    let html = std::str::from_utf8(bytes)?;
    Ok(extract_first_table(html))
}
