//! # STAR/CIF 文本分词与解析
//!
//! 将 CIF 文本解析为无类型的 [`Document`]。支持无引号、单/双引号和分号文本块
//! 三种取值形式，`#` 注释，`.` / `?` 特殊值。`save_` 帧被解析后丢弃。
//!
//! ## 依赖关系
//! - 被 `cif/parser.rs` 使用
//! - 使用 `star/dom.rs`, `error.rs`

use super::dom::{Block, Datum, Document, Loop, Value};
use crate::error::{CifError, Result};

/// 解析 CIF 文本
pub fn parse(input: &str) -> Result<Document> {
    Parser::new(input).parse_document()
}

#[derive(Debug)]
enum Token {
    DataBlock(String),
    LoopStart,
    SaveStart,
    SaveEnd,
    Tag(String),
    Val(Value),
    Eof,
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    at_line_start: bool,
    pending: Option<Token>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            at_line_start: true,
            pending: None,
        }
    }

    fn next(&mut self) -> Result<Token> {
        if let Some(t) = self.pending.take() {
            return Ok(t);
        }
        self.scan_token()
    }

    fn push_back(&mut self, token: Token) {
        debug_assert!(self.pending.is_none());
        self.pending = Some(token);
    }

    // ─────────────────────────────────────────────────────────────
    // 分词
    // ─────────────────────────────────────────────────────────────

    fn skip_whitespace_and_comments(&mut self) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b' ' | b'\t' | b'\r' => self.pos += 1,
                b'\n' => {
                    self.pos += 1;
                    self.at_line_start = true;
                }
                b'#' => {
                    while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();
        if self.pos >= self.bytes.len() {
            return Ok(Token::Eof);
        }

        let b = self.bytes[self.pos];

        // 分号文本块只能出现在行首
        if b == b';' && self.at_line_start {
            return self.scan_semicolon_text();
        }

        self.at_line_start = false;

        if b == b'\'' || b == b'"' {
            return self.scan_quoted(b);
        }

        let start = self.pos;
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Ok(classify_unquoted(&self.input[start..self.pos]))
    }

    fn scan_quoted(&mut self, quote: u8) -> Result<Token> {
        let start = self.pos;
        self.pos += 1;
        loop {
            if self.pos >= self.bytes.len() || self.bytes[self.pos] == b'\n' {
                return Err(CifError::Tokenize {
                    offset: start,
                    reason: "unterminated quoted string".to_string(),
                });
            }
            // 闭合引号后必须是空白或文件结尾
            if self.bytes[self.pos] == quote
                && (self.pos + 1 >= self.bytes.len()
                    || self.bytes[self.pos + 1].is_ascii_whitespace())
            {
                let val = self.input[start + 1..self.pos].to_string();
                self.pos += 1;
                return Ok(Token::Val(Value::Str(val)));
            }
            self.pos += 1;
        }
    }

    fn scan_semicolon_text(&mut self) -> Result<Token> {
        let start = self.pos;
        self.pos += 1;
        self.at_line_start = false;
        let content_start = self.pos;

        loop {
            while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
                self.pos += 1;
            }
            if self.pos >= self.bytes.len() {
                return Err(CifError::Tokenize {
                    offset: start,
                    reason: "unterminated semicolon text field".to_string(),
                });
            }
            self.pos += 1;

            if self.pos < self.bytes.len() && self.bytes[self.pos] == b';' {
                let content_end = self.pos - 1;
                let text = self.input[content_start..content_end]
                    .trim_end_matches('\r')
                    .to_string();
                self.pos += 1;
                return Ok(Token::Val(Value::Str(text)));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // 结构解析
    // ─────────────────────────────────────────────────────────────

    fn parse_document(&mut self) -> Result<Document> {
        let mut blocks = Vec::new();
        loop {
            match self.next()? {
                Token::Eof => break,
                Token::DataBlock(name) => blocks.push(self.parse_block(name)?),
                // 第一个数据块之前的内容忽略
                _ => {}
            }
        }
        Ok(Document { blocks })
    }

    fn parse_block(&mut self, name: String) -> Result<Block> {
        let mut block = Block::new(name);

        loop {
            let token = self.next()?;
            match token {
                Token::Eof | Token::DataBlock(_) => {
                    self.push_back(token);
                    break;
                }
                Token::LoopStart => block.loops.push(self.parse_loop()?),
                Token::SaveStart => self.skip_save_frame()?,
                Token::SaveEnd => {}
                Token::Tag(tag) => match self.next()? {
                    Token::Val(v) => block.entries.push((tag, Datum::from_value(v))),
                    // 缺值的标签
                    other => self.push_back(other),
                },
                Token::Val(_) => {}
            }
        }

        Ok(block)
    }

    fn skip_save_frame(&mut self) -> Result<()> {
        loop {
            match self.next()? {
                Token::SaveEnd => return Ok(()),
                token @ (Token::Eof | Token::DataBlock(_)) => {
                    self.push_back(token);
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    fn parse_loop(&mut self) -> Result<Loop> {
        let mut tags = Vec::new();
        loop {
            match self.next()? {
                Token::Tag(t) => tags.push(t),
                other => {
                    self.push_back(other);
                    break;
                }
            }
        }

        let mut values = Vec::new();
        loop {
            match self.next()? {
                Token::Val(v) => values.push(Datum::from_value(v)),
                other => {
                    self.push_back(other);
                    break;
                }
            }
        }

        let mut lp = Loop::new(tags);
        if !lp.tags.is_empty() {
            // 不完整的尾行丢弃
            let width = lp.tags.len();
            let complete = values.len() / width * width;
            values.truncate(complete);
            let mut iter = values.into_iter();
            for _ in 0..complete / width {
                lp.rows.push(iter.by_ref().take(width).collect());
            }
        }
        Ok(lp)
    }
}

fn classify_unquoted(s: &str) -> Token {
    let lower = s.to_ascii_lowercase();
    if lower.starts_with("data_") {
        Token::DataBlock(s[5..].to_string())
    } else if lower == "loop_" {
        Token::LoopStart
    } else if lower.starts_with("save_") {
        if s.len() == 5 {
            Token::SaveEnd
        } else {
            Token::SaveStart
        }
    } else if s.starts_with('_') {
        Token::Tag(s.to_string())
    } else if s == "." {
        Token::Val(Value::Inapplicable)
    } else if s == "?" {
        Token::Val(Value::Unknown)
    } else {
        Token::Val(Value::Str(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_pairs() {
        let doc = parse("data_test\n_cell.length_a 5.4307(2)\n_cell_length_b 60.0\n").unwrap();
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0].name, "test");

        let a = doc.blocks[0].get("_cell_length_a").unwrap();
        assert_eq!(a.as_str(), Some("5.4307(2)"));
        assert!((a.number.unwrap() - 5.4307).abs() < 1e-12);
        assert!((a.error.unwrap() - 0.0002).abs() < 1e-12);
        assert_eq!(doc.blocks[0].get("_cell.length_b").unwrap().as_f64(), Some(60.0));
    }

    #[test]
    fn test_loop_rows() {
        let doc = parse("data_t\nloop_\n_a\n_b\nx 1\ny 2\n").unwrap();
        let lp = &doc.blocks[0].loops[0];
        assert_eq!(lp.nrows(), 2);
        assert_eq!(lp.get(1, "_a").and_then(|d| d.as_str()), Some("y"));
        assert_eq!(lp.get(1, "_b").and_then(|d| d.as_f64()), Some(2.0));
    }

    #[test]
    fn test_incomplete_trailing_row_dropped() {
        let doc = parse("data_t\nloop_\n_a\n_b\nx 1\ny\n").unwrap();
        assert_eq!(doc.blocks[0].loops[0].nrows(), 1);
    }

    #[test]
    fn test_quoted_and_text_fields() {
        let input = "data_t\n_sg 'F d -3 m'\n_q \"it's\"\n_txt\n;line one\nline two\n;\n";
        let doc = parse(input).unwrap();
        let block = &doc.blocks[0];
        assert_eq!(block.get("_sg").and_then(|d| d.as_str()), Some("F d -3 m"));
        assert_eq!(block.get("_q").and_then(|d| d.as_str()), Some("it's"));
        assert_eq!(
            block.get("_txt").and_then(|d| d.as_str()),
            Some("line one\nline two")
        );
    }

    #[test]
    fn test_special_values_and_comments() {
        let doc = parse("# header\ndata_t\n_a . # inline\n_b ?\n").unwrap();
        let block = &doc.blocks[0];
        assert_eq!(block.get("_a").unwrap().value, Value::Inapplicable);
        assert_eq!(block.get("_b").unwrap().value, Value::Unknown);
        assert_eq!(block.get("_a").unwrap().number, None);
    }

    #[test]
    fn test_multiple_blocks() {
        let doc = parse("data_first\n_a 1\ndata_second\n_b 2\n").unwrap();
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[1].name, "second");
        assert!(doc.blocks[0].get("_b").is_none());
    }

    #[test]
    fn test_save_frame_skipped() {
        let doc = parse("data_d\nsave_frame\n_inner 1\nsave_\n_outer 2\n").unwrap();
        assert!(doc.blocks[0].get("_inner").is_none());
        assert_eq!(doc.blocks[0].get("_outer").and_then(|d| d.as_f64()), Some(2.0));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse("data_t\n_tag 'open\n").unwrap_err();
        assert!(matches!(err, CifError::Tokenize { .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().blocks.is_empty());
    }
}
