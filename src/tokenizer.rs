//! The lexical core: turns a character cursor into a lazy sequence of tokens.
//!
//! [`Tokenizer`] is modeled as a plain [`Iterator`] over `Result<Token,
//! Error>`, driven by an explicit stack of open containers rather than a
//! coroutine. Each call to [`Iterator::next`] advances the cursor just far
//! enough to produce one token (or a comment, which is a token too) and
//! pauses. After the first `Err`, the iterator is exhausted.

use crate::cursor::{is_jsonh_whitespace, is_newline, CharCursor};
use crate::error::{Context, Error};
use crate::options::{JsonhOptions, JsonhVersion};
use crate::token::{Token, TokenKind};
use std::collections::VecDeque;
use std::str::Chars;

const RESERVED_V1: [char; 11] = ['\\', ',', ':', '[', ']', '{', '}', '/', '#', '"', '\''];
const RESERVED_V2: [char; 12] = ['\\', ',', ':', '[', ']', '{', '}', '/', '#', '"', '\'', '@'];

fn reserved_chars(version: JsonhVersion) -> &'static [char] {
    match version {
        JsonhVersion::V1 => &RESERVED_V1,
        JsonhVersion::V2 => &RESERVED_V2,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ObjState {
    Start,
    AfterProperty,
    AfterColon,
    AfterValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArrState {
    Start,
    AfterValue,
}

#[derive(Clone, Copy, Debug)]
enum Frame {
    Object { state: ObjState, braceless: bool },
    Array { state: ArrState },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum NumBase {
    Decimal,
    Octal,
    Binary,
    Hex,
}

enum ElementStart {
    Container,
    Primitive(Token),
}

/// Lazily tokenizes a character stream per the JSONH grammar.
///
/// Construct one with [`crate::tokenize`] or [`crate::tokenize_iter`] rather
/// than directly.
pub struct Tokenizer<I: Iterator<Item = char>> {
    cursor: CharCursor<I>,
    options: JsonhOptions,
    line: usize,
    col: usize,
    stack: Vec<Frame>,
    queue: VecDeque<Result<Token, Error>>,
    started: bool,
    root_finished: bool,
    trailing_checked: bool,
    done: bool,
    last_was_cr: bool,
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    pub fn new(source: I, options: JsonhOptions) -> Self {
        Tokenizer {
            cursor: CharCursor::new(source),
            options,
            line: 1,
            col: 1,
            stack: Vec::new(),
            queue: VecDeque::new(),
            started: false,
            root_finished: false,
            trailing_checked: false,
            done: false,
            last_was_cr: false,
        }
    }

    /// Skips whitespace and reports whether any non-whitespace remains.
    pub fn has_token(&mut self) -> bool {
        self.skip_whitespace();
        !self.at_end()
    }

    // -- cursor plumbing with line/col tracking -----------------------------

    fn peek(&mut self) -> Option<char> {
        self.cursor.peek()
    }

    fn peek_at(&mut self, n: usize) -> Option<char> {
        self.cursor.peek_at(n)
    }

    fn at_end(&mut self) -> bool {
        self.cursor.at_end()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.cursor.read()?;
        match c {
            '\n' => {
                if !self.last_was_cr {
                    self.line += 1;
                    self.col = 1;
                }
                self.last_was_cr = false;
            }
            '\r' => {
                self.line += 1;
                self.col = 1;
                self.last_was_cr = true;
            }
            crate::cursor::LINE_SEPARATOR | crate::cursor::PARAGRAPH_SEPARATOR => {
                self.line += 1;
                self.col = 1;
                self.last_was_cr = false;
            }
            _ => {
                self.col += 1;
                self.last_was_cr = false;
            }
        }
        Some(c)
    }

    fn read_if(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn read_any(&mut self, set: &[char]) -> Option<char> {
        match self.peek() {
            Some(c) if set.contains(&c) => {
                self.bump();
                Some(c)
            }
            _ => None,
        }
    }

    fn skip_whitespace(&mut self) -> usize {
        let mut n = 0;
        while let Some(c) = self.peek() {
            if is_jsonh_whitespace(c) {
                self.bump();
                n += 1;
            } else {
                break;
            }
        }
        n
    }

    // -- error helpers --------------------------------------------------

    fn err_unexpected_eof(&self, context: Context) -> Error {
        Error::unexpected_eof(self.line, self.col, context)
    }

    fn err_unexpected_character(&self, found: Option<char>, msg: impl Into<String>) -> Error {
        Error::unexpected_character(self.line, self.col, found, msg)
    }

    fn err_malformed_escape(&self, msg: impl Into<String>) -> Error {
        Error::malformed_escape(self.line, self.col, msg)
    }

    fn err_depth_exceeded(&self) -> Error {
        Error::depth_exceeded(self.line, self.col, self.options.max_depth)
    }

    // -- container frames -------------------------------------------------

    fn push_object_frame(&mut self, braceless: bool) -> Result<(), Error> {
        if self.stack.len() >= self.options.max_depth {
            return Err(self.err_depth_exceeded());
        }
        let state = if braceless {
            ObjState::AfterColon
        } else {
            ObjState::Start
        };
        self.stack.push(Frame::Object { state, braceless });
        Ok(())
    }

    fn push_array_frame(&mut self) -> Result<(), Error> {
        if self.stack.len() >= self.options.max_depth {
            return Err(self.err_depth_exceeded());
        }
        self.stack.push(Frame::Array {
            state: ArrState::Start,
        });
        Ok(())
    }

    fn set_object_state(&mut self, idx: usize, state: ObjState) {
        if let Frame::Object { state: s, .. } = &mut self.stack[idx] {
            *s = state;
        }
    }

    fn set_array_state(&mut self, idx: usize, state: ArrState) {
        if let Frame::Array { state: s } = &mut self.stack[idx] {
            *s = state;
        }
    }

    // -- comments -----------------------------------------------------------

    fn try_comment(&mut self) -> Option<Result<Token, Error>> {
        match self.peek() {
            Some('#') => Some(self.read_hash_comment()),
            Some('/') => match self.peek_at(1) {
                Some('/') => Some(self.read_line_comment()),
                Some('*') => Some(self.read_block_or_nestable_comment()),
                Some('=') if self.options.version.supports(JsonhVersion::V2) => {
                    Some(self.read_block_or_nestable_comment())
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn read_hash_comment(&mut self) -> Result<Token, Error> {
        let pos = self.cursor.position();
        self.bump();
        let mut body = String::new();
        while let Some(c) = self.peek() {
            if is_newline(c) {
                break;
            }
            self.bump();
            body.push(c);
        }
        Ok(Token::new(TokenKind::Comment, body, pos))
    }

    fn read_line_comment(&mut self) -> Result<Token, Error> {
        let pos = self.cursor.position();
        self.bump();
        self.bump();
        let mut body = String::new();
        while let Some(c) = self.peek() {
            if is_newline(c) {
                break;
            }
            self.bump();
            body.push(c);
        }
        Ok(Token::new(TokenKind::Comment, body, pos))
    }

    fn closes_nestable(&mut self, k: usize) -> bool {
        for i in 0..k {
            if self.peek_at(1 + i) != Some('=') {
                return false;
            }
        }
        self.peek_at(1 + k) == Some('/')
    }

    fn read_block_or_nestable_comment(&mut self) -> Result<Token, Error> {
        let pos = self.cursor.position();
        self.bump(); // '/'
        let mut k = 0usize;
        while self.peek() == Some('=') {
            self.bump();
            k += 1;
        }
        if self.peek() != Some('*') {
            let found = self.peek();
            return Err(self.err_unexpected_character(found, "expected '*' to open a comment"));
        }
        self.bump(); // '*'

        if k == 0 {
            let mut body = String::new();
            loop {
                match self.peek() {
                    None => return Err(self.err_unexpected_eof(Context::BlockComment)),
                    Some('*') if self.peek_at(1) == Some('/') => {
                        self.bump();
                        self.bump();
                        break;
                    }
                    Some(c) => {
                        self.bump();
                        body.push(c);
                    }
                }
            }
            Ok(Token::new(TokenKind::Comment, body, pos))
        } else {
            if !self.options.version.supports(JsonhVersion::V2) {
                return Err(self.err_unexpected_character(
                    Some('='),
                    "nestable block comments require JSONH V2",
                ));
            }
            let mut body = String::new();
            loop {
                match self.peek() {
                    None => return Err(self.err_unexpected_eof(Context::NestedBlockComment)),
                    Some('*') => {
                        if self.closes_nestable(k) {
                            self.bump();
                            for _ in 0..k {
                                self.bump();
                            }
                            self.bump();
                            break;
                        }
                        self.bump();
                        body.push('*');
                    }
                    Some(c) => {
                        self.bump();
                        body.push(c);
                    }
                }
            }
            Ok(Token::new(TokenKind::Comment, body, pos))
        }
    }

    /// Skips whitespace and, if a comment starts here, reads exactly one and
    /// reports it. Used by every call site that must tolerate interleaved
    /// comments before deciding what structural character comes next.
    fn skip_ws_comments_step(&mut self) -> Result<bool, Error> {
        self.skip_whitespace();
        match self.try_comment() {
            Some(Ok(tok)) => {
                self.queue.push_back(Ok(tok));
                Ok(true)
            }
            Some(Err(e)) => Err(e),
            None => Ok(false),
        }
    }

    /// Skips whitespace and any number of comments, collecting the comments,
    /// and reports whether `:` immediately follows.
    fn scan_for_colon(&mut self) -> Result<(Vec<Token>, bool), Error> {
        let mut comments = Vec::new();
        loop {
            self.skip_whitespace();
            match self.try_comment() {
                Some(Ok(tok)) => comments.push(tok),
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }
        Ok((comments, self.peek() == Some(':')))
    }

    // -- strings --------------------------------------------------------

    fn read_raw_until_quote(&mut self, quote: char) -> Result<String, Error> {
        let mut raw = String::new();
        loop {
            match self.peek() {
                None => return Err(self.err_unexpected_eof(Context::String)),
                Some('\\') => {
                    self.bump();
                    raw.push('\\');
                    match self.peek() {
                        None => return Err(self.err_unexpected_eof(Context::String)),
                        Some(c) => {
                            self.bump();
                            raw.push(c);
                        }
                    }
                }
                Some(c) if c == quote => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    self.bump();
                    raw.push(c);
                }
            }
        }
        Ok(raw)
    }

    fn read_raw_until_quote_verbatim(&mut self, quote: char) -> Result<String, Error> {
        let mut raw = String::new();
        loop {
            match self.peek() {
                None => return Err(self.err_unexpected_eof(Context::String)),
                Some(c) if c == quote => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    self.bump();
                    raw.push(c);
                }
            }
        }
        Ok(raw)
    }

    fn read_heredoc_body(&mut self, quote: char, n: usize) -> Result<String, Error> {
        let mut body = String::new();
        loop {
            match self.peek() {
                None => return Err(self.err_unexpected_eof(Context::MultiQuotedString)),
                Some(c) if c == quote => {
                    let mut run = 0;
                    while self.peek() == Some(quote) {
                        self.bump();
                        run += 1;
                    }
                    if run >= n {
                        for _ in 0..(run - n) {
                            body.push(quote);
                        }
                        break;
                    }
                    for _ in 0..run {
                        body.push(quote);
                    }
                }
                Some(c) => {
                    self.bump();
                    body.push(c);
                }
            }
        }
        Ok(body)
    }

    fn read_quoted_string_content(&mut self, verbatim: bool) -> Result<String, Error> {
        let quote = self.peek().expect("caller checked for a quote character");
        let mut run = 0usize;
        while self.peek() == Some(quote) {
            self.bump();
            run += 1;
        }
        if run == 2 {
            return Ok(String::new());
        }
        if run == 1 {
            let raw = if verbatim {
                self.read_raw_until_quote_verbatim(quote)?
            } else {
                self.read_raw_until_quote(quote)?
            };
            return if verbatim {
                Ok(raw)
            } else {
                unescape(&raw).map_err(|m| self.err_malformed_escape(m))
            };
        }
        let raw = self.read_heredoc_body(quote, run)?;
        let stripped = strip_multiquote_indentation(&raw);
        if verbatim {
            Ok(stripped)
        } else {
            unescape(&stripped).map_err(|m| self.err_malformed_escape(m))
        }
    }

    fn collect_quoteless_raw(&mut self, verbatim: bool) -> Result<(String, bool), Error> {
        let mut raw = String::new();
        let mut used_escape = false;
        let reserved = reserved_chars(self.options.version);
        loop {
            match self.peek() {
                None => break,
                Some(c) if is_newline(c) => break,
                Some('\\') => {
                    if verbatim {
                        self.bump();
                        raw.push('\\');
                    } else {
                        used_escape = true;
                        self.bump();
                        raw.push('\\');
                        match self.peek() {
                            None => return Err(self.err_unexpected_eof(Context::QuotelessString)),
                            Some(c2) => {
                                self.bump();
                                raw.push(c2);
                            }
                        }
                    }
                }
                Some(c) if reserved.contains(&c) => break,
                Some(c) => {
                    self.bump();
                    raw.push(c);
                }
            }
        }
        Ok((raw, used_escape))
    }

    fn finish_quoteless_text(&mut self, raw: String, verbatim: bool) -> Result<String, Error> {
        let trimmed = raw.trim().to_string();
        if trimmed.is_empty() {
            return Err(self.err_unexpected_character(None, "empty quoteless string"));
        }
        if verbatim {
            Ok(trimmed)
        } else {
            unescape(&trimmed).map_err(|m| self.err_malformed_escape(m))
        }
    }

    fn read_quoteless_content(&mut self, verbatim: bool) -> Result<(String, bool), Error> {
        let (raw, used_escape) = self.collect_quoteless_raw(verbatim)?;
        let content = self.finish_quoteless_text(raw, verbatim)?;
        Ok((content, used_escape))
    }

    fn maybe_upgrade_literal(&self, s: String, used_escape: bool, pos: usize) -> Token {
        if !used_escape {
            match s.as_str() {
                "null" => return Token::new(TokenKind::Null, "", pos),
                "true" => return Token::new(TokenKind::True, "", pos),
                "false" => return Token::new(TokenKind::False, "", pos),
                _ => {}
            }
        }
        Token::new(TokenKind::String, s, pos)
    }

    fn read_property_name_token(&mut self) -> Result<Token, Error> {
        let pos = self.cursor.position();
        let text = match self.peek() {
            Some('"') | Some('\'') => self.read_quoted_string_content(false)?,
            Some('@') if self.options.version.supports(JsonhVersion::V2) => {
                self.bump();
                match self.peek() {
                    Some('"') | Some('\'') => self.read_quoted_string_content(true)?,
                    _ => self.read_quoteless_content(true)?.0,
                }
            }
            None => return Err(self.err_unexpected_eof(Context::Property)),
            _ => self.read_quoteless_content(false)?.0,
        };
        Ok(Token::new(TokenKind::PropertyName, text, pos))
    }

    // -- numbers --------------------------------------------------------

    fn digit_ok(&mut self, base: NumBase, c: char) -> bool {
        match base {
            NumBase::Decimal => c.is_ascii_digit(),
            NumBase::Octal => ('0'..='7').contains(&c),
            NumBase::Binary => c == '0' || c == '1',
            NumBase::Hex => {
                if matches!(c, 'e' | 'E') && matches!(self.peek_at(1), Some('+') | Some('-')) {
                    false
                } else {
                    c.is_ascii_hexdigit()
                }
            }
        }
    }

    /// Reads a run of digits (with `_` separators between digits), pushing
    /// them into `buf`. Returns `true` if the run ended on a trailing `_`
    /// with no following digit — the caller must then reject the whole
    /// number so it demotes to a quoteless string instead.
    fn read_digit_run(&mut self, buf: &mut String, base: NumBase, saw_digit: &mut bool) -> bool {
        loop {
            match self.peek() {
                Some(c) if self.digit_ok(base, c) => {
                    self.bump();
                    buf.push(c);
                    *saw_digit = true;
                }
                Some('_') if *saw_digit => {
                    let mut n = 0usize;
                    while matches!(self.peek_at(n), Some('_')) {
                        n += 1;
                    }
                    if !matches!(self.peek_at(n), Some(c) if self.digit_ok(base, c)) {
                        // Trailing underscore(s) with no digit after: leave
                        // them unconsumed for the quoteless fallback.
                        return true;
                    }
                    for _ in 0..n {
                        buf.push(self.bump().unwrap());
                    }
                }
                _ => break,
            }
        }
        false
    }

    fn try_number_upgrade(&mut self) -> Option<String> {
        let mut n = 0usize;
        while matches!(self.peek_at(n), Some(c) if is_jsonh_whitespace(c) && !is_newline(c)) {
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let reserved = reserved_chars(self.options.version);
        let upgrades = matches!(self.peek_at(n), Some(c) if c == '\\' || !reserved.contains(&c));
        if !upgrades {
            return None;
        }
        let mut ws = String::new();
        for _ in 0..n {
            ws.push(self.bump().unwrap());
        }
        Some(ws)
    }

    fn read_number_or_quoteless(&mut self, pos: usize) -> Result<Token, Error> {
        let mut buf = String::new();
        if let Some(c) = self.read_any(&['+', '-']) {
            buf.push(c);
        }

        let mut base = NumBase::Decimal;
        if self.peek() == Some('0') && matches!(self.peek_at(1), Some('x') | Some('X')) {
            buf.push(self.bump().unwrap());
            buf.push(self.bump().unwrap());
            base = NumBase::Hex;
        } else if self.peek() == Some('0') && matches!(self.peek_at(1), Some('o') | Some('O')) {
            buf.push(self.bump().unwrap());
            buf.push(self.bump().unwrap());
            base = NumBase::Octal;
        } else if self.peek() == Some('0') && matches!(self.peek_at(1), Some('b') | Some('B')) {
            buf.push(self.bump().unwrap());
            buf.push(self.bump().unwrap());
            base = NumBase::Binary;
        }

        let mut saw_digit = false;
        let mantissa_trailing_underscore = self.read_digit_run(&mut buf, base, &mut saw_digit);
        let mut valid = saw_digit && !mantissa_trailing_underscore;

        if valid && self.peek() == Some('.') && matches!(self.peek_at(1), Some(c) if self.digit_ok(base, c))
        {
            self.bump();
            buf.push('.');
            let mut saw_frac = false;
            let frac_trailing_underscore = self.read_digit_run(&mut buf, base, &mut saw_frac);
            valid = saw_frac && !frac_trailing_underscore;
        }

        if valid {
            let is_hex = base == NumBase::Hex;
            let has_e = matches!(self.peek(), Some('e') | Some('E'));
            let exponent_recognized = has_e
                && (!is_hex || matches!(self.peek_at(1), Some('+') | Some('-')));
            if exponent_recognized {
                buf.push(self.bump().unwrap());
                if let Some(sign) = self.read_any(&['+', '-']) {
                    buf.push(sign);
                }
                let mut saw_exp_digit = false;
                loop {
                    match self.peek() {
                        Some(c) if c.is_ascii_digit() => {
                            self.bump();
                            buf.push(c);
                            saw_exp_digit = true;
                        }
                        Some('_') if saw_exp_digit => {
                            let mut n = 0usize;
                            while matches!(self.peek_at(n), Some('_')) {
                                n += 1;
                            }
                            if !matches!(self.peek_at(n), Some(c) if c.is_ascii_digit()) {
                                // Trailing underscore(s) with no digit after
                                // invalidate the whole number; leave them
                                // unconsumed for the quoteless fallback.
                                saw_exp_digit = false;
                                break;
                            }
                            for _ in 0..n {
                                buf.push(self.bump().unwrap());
                            }
                        }
                        Some('.') if saw_exp_digit && matches!(self.peek_at(1), Some(c) if c.is_ascii_digit()) =>
                        {
                            self.bump();
                            buf.push('.');
                            while let Some(c) = self.peek() {
                                if c.is_ascii_digit() {
                                    self.bump();
                                    buf.push(c);
                                } else {
                                    break;
                                }
                            }
                            break;
                        }
                        _ => break,
                    }
                }
                valid = saw_exp_digit;
            }
        }

        if !valid {
            let (rest_raw, used_escape) = self.collect_quoteless_raw(false)?;
            let combined = format!("{buf}{rest_raw}");
            let content = self.finish_quoteless_text(combined, false)?;
            return Ok(self.maybe_upgrade_literal(content, used_escape, pos));
        }

        if let Some(ws) = self.try_number_upgrade() {
            let (rest_raw, used_escape) = self.collect_quoteless_raw(false)?;
            let combined = format!("{buf}{ws}{rest_raw}");
            let content = self.finish_quoteless_text(combined, false)?;
            return Ok(self.maybe_upgrade_literal(content, used_escape, pos));
        }

        Ok(Token::new(TokenKind::Number, buf, pos))
    }

    // -- elements ---------------------------------------------------------

    fn read_value_token(&mut self) -> Result<Token, Error> {
        let pos = self.cursor.position();
        match self.peek() {
            Some('"') | Some('\'') => {
                let s = self.read_quoted_string_content(false)?;
                Ok(Token::new(TokenKind::String, s, pos))
            }
            Some('@') if self.options.version.supports(JsonhVersion::V2) => {
                self.bump();
                match self.peek() {
                    Some('"') | Some('\'') => {
                        let s = self.read_quoted_string_content(true)?;
                        Ok(Token::new(TokenKind::String, s, pos))
                    }
                    _ => {
                        let (s, _) = self.read_quoteless_content(true)?;
                        Ok(Token::new(TokenKind::String, s, pos))
                    }
                }
            }
            Some(c) if c.is_ascii_digit() || c == '+' || c == '-' || c == '.' => {
                self.read_number_or_quoteless(pos)
            }
            None => Err(self.err_unexpected_eof(Context::Property)),
            _ => {
                let (s, used_escape) = self.read_quoteless_content(false)?;
                Ok(self.maybe_upgrade_literal(s, used_escape, pos))
            }
        }
    }

    fn begin_element(&mut self) -> Result<ElementStart, Error> {
        if self.at_end() {
            return Err(self.err_unexpected_eof(Context::Property));
        }
        match self.peek() {
            Some('{') => {
                let pos = self.cursor.position();
                self.bump();
                self.push_object_frame(false)?;
                self.queue.push_back(Ok(Token::new(TokenKind::StartObject, "", pos)));
                Ok(ElementStart::Container)
            }
            Some('[') => {
                let pos = self.cursor.position();
                self.bump();
                self.push_array_frame()?;
                self.queue.push_back(Ok(Token::new(TokenKind::StartArray, "", pos)));
                Ok(ElementStart::Container)
            }
            _ => Ok(ElementStart::Primitive(self.read_value_token()?)),
        }
    }

    // -- driving ------------------------------------------------------------

    fn finished_naturally(&self) -> bool {
        self.stack.is_empty() && self.started && self.root_finished && self.trailing_checked
    }

    fn drain_trailing(&mut self) -> Result<(), Error> {
        loop {
            self.skip_whitespace();
            match self.try_comment() {
                Some(Ok(tok)) => {
                    self.queue.push_back(Ok(tok));
                    continue;
                }
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }
        if !self.at_end() {
            return Err(Error::expected_single_element(self.line, self.col));
        }
        Ok(())
    }

    fn produce_root(&mut self) -> Result<(), Error> {
        if self.skip_ws_comments_step()? {
            return Ok(());
        }
        if self.at_end() {
            self.root_finished = true;
            return Ok(());
        }
        match self.peek() {
            Some('{') => {
                let pos = self.cursor.position();
                self.bump();
                self.push_object_frame(false)?;
                self.queue.push_back(Ok(Token::new(TokenKind::StartObject, "", pos)));
                Ok(())
            }
            Some('[') => {
                let pos = self.cursor.position();
                self.bump();
                self.push_array_frame()?;
                self.queue.push_back(Ok(Token::new(TokenKind::StartArray, "", pos)));
                Ok(())
            }
            _ => {
                let tok = self.read_value_token()?;
                let (comments, has_colon) = self.scan_for_colon()?;
                if has_colon {
                    self.bump(); // ':'
                    // `true`/`false`/`null` read as a root primitive are
                    // upgraded to literal-kind tokens whose `value` is
                    // empty; a literal upgrade only ever fires on an exact,
                    // unescaped match of one of these three words, so the
                    // property name is recoverable from the token kind.
                    let name = match tok.kind {
                        TokenKind::Null => "null".to_string(),
                        TokenKind::True => "true".to_string(),
                        TokenKind::False => "false".to_string(),
                        _ => tok.value,
                    };
                    self.queue
                        .push_back(Ok(Token::new(TokenKind::StartObject, "", tok.position)));
                    self.queue
                        .push_back(Ok(Token::new(TokenKind::PropertyName, name, tok.position)));
                    for c in comments {
                        self.queue.push_back(Ok(c));
                    }
                    self.push_object_frame(true)?;
                } else {
                    self.queue.push_back(Ok(tok));
                    for c in comments {
                        self.queue.push_back(Ok(c));
                    }
                    self.root_finished = true;
                }
                Ok(())
            }
        }
    }

    fn produce_object(&mut self, idx: usize) -> Result<(), Error> {
        if self.skip_ws_comments_step()? {
            return Ok(());
        }
        let (state, braceless) = match self.stack[idx] {
            Frame::Object { state, braceless } => (state, braceless),
            _ => unreachable!(),
        };
        match state {
            ObjState::Start => {
                if self.peek() == Some('}') {
                    if braceless {
                        return Err(self
                            .err_unexpected_character(Some('}'), "unmatched '}' in a braceless object"));
                    }
                    let pos = self.cursor.position();
                    self.bump();
                    self.stack.pop();
                    self.queue.push_back(Ok(Token::new(TokenKind::EndObject, "", pos)));
                    if self.stack.is_empty() {
                        self.root_finished = true;
                    }
                    return Ok(());
                }
                if self.at_end() {
                    if braceless || self.options.incomplete_inputs {
                        let pos = self.cursor.position();
                        self.stack.pop();
                        self.queue.push_back(Ok(Token::new(TokenKind::EndObject, "", pos)));
                        if self.stack.is_empty() {
                            self.root_finished = true;
                        }
                        return Ok(());
                    }
                    return Err(self.err_unexpected_eof(Context::Object));
                }
                let name_tok = self.read_property_name_token()?;
                self.set_object_state(idx, ObjState::AfterProperty);
                self.queue.push_back(Ok(name_tok));
                Ok(())
            }
            ObjState::AfterProperty => {
                if self.peek() != Some(':') {
                    if self.at_end() && self.options.incomplete_inputs {
                        let pos = self.cursor.position();
                        self.stack.pop();
                        self.queue.push_back(Ok(Token::new(TokenKind::EndObject, "", pos)));
                        if self.stack.is_empty() {
                            self.root_finished = true;
                        }
                        return Ok(());
                    }
                    let found = self.peek();
                    return Err(self.err_unexpected_character(found, "expected ':' after property name"));
                }
                self.bump();
                self.set_object_state(idx, ObjState::AfterColon);
                Ok(())
            }
            ObjState::AfterColon => match self.begin_element()? {
                ElementStart::Container => {
                    self.set_object_state(idx, ObjState::AfterValue);
                    Ok(())
                }
                ElementStart::Primitive(tok) => {
                    self.queue.push_back(Ok(tok));
                    self.set_object_state(idx, ObjState::AfterValue);
                    Ok(())
                }
            },
            ObjState::AfterValue => {
                if self.peek() == Some(',') {
                    self.bump();
                    self.set_object_state(idx, ObjState::Start);
                    return Ok(());
                }
                if self.peek() == Some('}') {
                    if braceless {
                        return Err(self
                            .err_unexpected_character(Some('}'), "unmatched '}' in a braceless object"));
                    }
                    let pos = self.cursor.position();
                    self.bump();
                    self.stack.pop();
                    self.queue.push_back(Ok(Token::new(TokenKind::EndObject, "", pos)));
                    if self.stack.is_empty() {
                        self.root_finished = true;
                    }
                    return Ok(());
                }
                if self.at_end() {
                    if braceless || self.options.incomplete_inputs {
                        let pos = self.cursor.position();
                        self.stack.pop();
                        self.queue.push_back(Ok(Token::new(TokenKind::EndObject, "", pos)));
                        if self.stack.is_empty() {
                            self.root_finished = true;
                        }
                        return Ok(());
                    }
                    return Err(self.err_unexpected_eof(Context::Object));
                }
                {
                    let found = self.peek();
                    Err(self.err_unexpected_character(found, "expected ',' or '}'"))
                }
            }
        }
    }

    fn produce_array(&mut self, idx: usize) -> Result<(), Error> {
        if self.skip_ws_comments_step()? {
            return Ok(());
        }
        let state = match self.stack[idx] {
            Frame::Array { state } => state,
            _ => unreachable!(),
        };
        match state {
            ArrState::Start => {
                if self.peek() == Some(']') {
                    let pos = self.cursor.position();
                    self.bump();
                    self.stack.pop();
                    self.queue.push_back(Ok(Token::new(TokenKind::EndArray, "", pos)));
                    if self.stack.is_empty() {
                        self.root_finished = true;
                    }
                    return Ok(());
                }
                if self.at_end() {
                    if self.options.incomplete_inputs {
                        let pos = self.cursor.position();
                        self.stack.pop();
                        self.queue.push_back(Ok(Token::new(TokenKind::EndArray, "", pos)));
                        if self.stack.is_empty() {
                            self.root_finished = true;
                        }
                        return Ok(());
                    }
                    return Err(self.err_unexpected_eof(Context::Array));
                }
                match self.peek() {
                    Some('{') | Some('[') => match self.begin_element()? {
                        ElementStart::Container => {
                            self.set_array_state(idx, ArrState::AfterValue);
                            Ok(())
                        }
                        ElementStart::Primitive(_) => unreachable!(),
                    },
                    _ => {
                        let tok = self.read_value_token()?;
                        let (comments, has_colon) = self.scan_for_colon()?;
                        if has_colon {
                            return Err(Error::nested_braceless_object(self.line, self.col));
                        }
                        self.queue.push_back(Ok(tok));
                        for c in comments {
                            self.queue.push_back(Ok(c));
                        }
                        self.set_array_state(idx, ArrState::AfterValue);
                        Ok(())
                    }
                }
            }
            ArrState::AfterValue => {
                if self.peek() == Some(',') {
                    self.bump();
                    self.set_array_state(idx, ArrState::Start);
                    return Ok(());
                }
                if self.peek() == Some(']') {
                    let pos = self.cursor.position();
                    self.bump();
                    self.stack.pop();
                    self.queue.push_back(Ok(Token::new(TokenKind::EndArray, "", pos)));
                    if self.stack.is_empty() {
                        self.root_finished = true;
                    }
                    return Ok(());
                }
                if self.at_end() {
                    if self.options.incomplete_inputs {
                        let pos = self.cursor.position();
                        self.stack.pop();
                        self.queue.push_back(Ok(Token::new(TokenKind::EndArray, "", pos)));
                        if self.stack.is_empty() {
                            self.root_finished = true;
                        }
                        return Ok(());
                    }
                    return Err(self.err_unexpected_eof(Context::Array));
                }
                {
                    let found = self.peek();
                    Err(self.err_unexpected_character(found, "expected ',' or ']'"))
                }
            }
        }
    }

    fn produce(&mut self) -> Result<(), Error> {
        if !self.started {
            self.started = true;
            return self.produce_root();
        }
        if let Some(idx) = self.stack.len().checked_sub(1) {
            match self.stack[idx] {
                Frame::Object { .. } => self.produce_object(idx),
                Frame::Array { .. } => self.produce_array(idx),
            }
        } else if self.root_finished && !self.trailing_checked {
            self.trailing_checked = true;
            if self.options.parse_single_element {
                self.drain_trailing()?;
            }
            Ok(())
        } else {
            Ok(())
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokenizer<I> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(item) = self.queue.pop_front() {
                if item.is_err() {
                    self.done = true;
                }
                return Some(item);
            }
            if self.finished_naturally() {
                self.done = true;
                return None;
            }
            match self.produce() {
                Ok(()) => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Tokenizes an in-memory string.
pub fn tokenize(source: &str, options: JsonhOptions) -> Tokenizer<Chars<'_>> {
    Tokenizer::new(source.chars(), options)
}

/// Tokenizes an arbitrary forward iterator of code points.
pub fn tokenize_iter<I: Iterator<Item = char>>(source: I, options: JsonhOptions) -> Tokenizer<I> {
    Tokenizer::new(source, options)
}

/// Strips indentation from a multi-quoted string body in five passes.
///
/// Operates on `char`s rather than bytes (the grammar's "byte" language is
/// ASCII-oriented for whitespace/newline purposes, so this is equivalent for
/// any input this crate accepts).
pub(crate) fn strip_multiquote_indentation(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();

    // Pass 1: leading whitespace run up to and including the first newline.
    let mut i = 0;
    while i < chars.len() && is_jsonh_whitespace(chars[i]) && !is_newline(chars[i]) {
        i += 1;
    }
    if i >= chars.len() || !is_newline(chars[i]) {
        return body.to_string();
    }
    let mut l = i + 1;
    if chars[i] == '\r' && chars.get(l) == Some(&'\n') {
        l += 1;
    }

    // Pass 2: last newline, and confirm everything after it is whitespace.
    let mut last_nl = None;
    for (idx, &c) in chars.iter().enumerate() {
        if is_newline(c) {
            last_nl = Some(idx);
        }
    }
    let Some(n) = last_nl else {
        return body.to_string();
    };
    let mut n_start = n;
    if n > 0 && chars[n - 1] == '\r' && chars[n] == '\n' {
        n_start = n - 1;
    }
    for &c in &chars[(n + 1)..] {
        if !is_jsonh_whitespace(c) {
            return body.to_string();
        }
    }
    let w = chars.len() - (n + 1);

    if l > n_start {
        return body.to_string();
    }

    // Passes 3-4: drop the tail from n_start and the head up to l.
    let middle = &chars[l..n_start];

    // Pass 5: strip up to `w` leading whitespace characters from each line.
    let mut out = String::new();
    let mut at_line_start = true;
    let mut stripped = 0usize;
    for &c in middle {
        if at_line_start && stripped < w && is_jsonh_whitespace(c) && !is_newline(c) {
            stripped += 1;
            continue;
        }
        out.push(c);
        if is_newline(c) {
            at_line_start = true;
            stripped = 0;
        } else {
            at_line_start = false;
        }
    }
    out
}

/// Decodes the escape alphabet shared by quoted, multi-quoted, and quoteless
/// strings (never applied to verbatim strings).
pub(crate) fn unescape(s: &str) -> Result<String, String> {
    let mut chars = s.chars().peekable();
    let mut out = String::new();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => return Err("unexpected end of input after '\\'".to_string()),
            Some('\\') => out.push('\\'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('v') => out.push('\u{B}'),
            Some('0') => out.push('\0'),
            Some('a') => out.push('\u{7}'),
            Some('e') => out.push('\u{1B}'),
            Some('x') => read_hex(&mut chars, 2, &mut out)?,
            Some('u') => read_hex_u(&mut chars, &mut out)?,
            Some('U') => read_hex(&mut chars, 8, &mut out)?,
            Some('\r') => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            Some(c2) if is_newline(c2) => {}
            Some(other) => out.push(other),
        }
    }
    Ok(out)
}

fn read_hex(chars: &mut std::iter::Peekable<Chars<'_>>, n: usize, out: &mut String) -> Result<(), String> {
    let mut hex = String::new();
    for _ in 0..n {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            _ => return Err(format!("expected {n} hex digits")),
        }
    }
    let code = u32::from_str_radix(&hex, 16).map_err(|_| "invalid hex digits".to_string())?;
    match char::from_u32(code) {
        Some(ch) => {
            out.push(ch);
            Ok(())
        }
        None => Err("invalid code point".to_string()),
    }
}

fn read_hex_u(chars: &mut std::iter::Peekable<Chars<'_>>, out: &mut String) -> Result<(), String> {
    let mut hex = String::new();
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            _ => return Err("expected 4 hex digits".to_string()),
        }
    }
    let code = u32::from_str_radix(&hex, 16).map_err(|_| "invalid hex digits".to_string())?;
    if let Some(ch) = char::from_u32(code) {
        out.push(ch);
        return Ok(());
    }
    if (0xD800..=0xDBFF).contains(&code) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            let mut hex2 = String::new();
            let mut ok = true;
            for _ in 0..4 {
                match lookahead.next() {
                    Some(c) if c.is_ascii_hexdigit() => hex2.push(c),
                    _ => {
                        ok = false;
                        break;
                    }
                }
            }
            if ok {
                if let Ok(low) = u32::from_str_radix(&hex2, 16) {
                    if (0xDC00..=0xDFFF).contains(&low) {
                        let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                        if let Some(ch) = char::from_u32(combined) {
                            *chars = lookahead;
                            out.push(ch);
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
    Err("unpaired surrogate".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::JsonhOptions;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src, JsonhOptions::new())
            .map(|r| r.unwrap().kind)
            .collect()
    }

    fn kinds_with(src: &str, options: JsonhOptions) -> Vec<TokenKind> {
        tokenize(src, options).map(|r| r.unwrap().kind).collect()
    }

    #[test]
    fn test_basic_object() {
        let toks: Vec<_> = tokenize("{\n  \"a\": \"b\"\n}", JsonhOptions::new())
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(
            toks.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::StartObject,
                TokenKind::PropertyName,
                TokenKind::String,
                TokenKind::EndObject,
            ]
        );
        assert_eq!(toks[1].value, "a");
        assert_eq!(toks[2].value, "b");
    }

    #[test]
    fn test_quoteless_array() {
        let toks: Vec<_> = tokenize("[nulla, null b, null, @null]", JsonhOptions::new())
            .map(|r| r.unwrap())
            .collect();
        let values: Vec<_> = toks
            .iter()
            .filter(|t| {
                matches!(
                    t.kind,
                    TokenKind::String | TokenKind::Null | TokenKind::True | TokenKind::False
                )
            })
            .map(|t| (t.kind, t.value.clone()))
            .collect();
        assert_eq!(
            values,
            vec![
                (TokenKind::String, "nulla".to_string()),
                (TokenKind::String, "null b".to_string()),
                (TokenKind::Null, "".to_string()),
                (TokenKind::String, "null".to_string()),
            ]
        );
    }

    #[test]
    fn test_braceless_object_at_root() {
        let toks = kinds("a: b\nc: d");
        assert_eq!(
            toks,
            vec![
                TokenKind::StartObject,
                TokenKind::PropertyName,
                TokenKind::String,
                TokenKind::PropertyName,
                TokenKind::String,
                TokenKind::EndObject,
            ]
        );
    }

    #[test]
    fn test_braceless_object_rejected_inside_array() {
        let err = tokenize("[ a: b ]", JsonhOptions::new())
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(err, Error::NestedBracelessObject { .. }));
    }

    #[test]
    fn test_numbers_hex_e_ambiguity() {
        let t = |s: &str| {
            tokenize(s, JsonhOptions::new())
                .next()
                .unwrap()
                .unwrap()
        };
        let tok = t("0x5e3");
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.value, "0x5e3");

        let tok = t("0x5e+3");
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.value, "0x5e+3");
    }

    #[test]
    fn test_bare_dot_is_quoteless_string() {
        let tok = tokenize(".", JsonhOptions::new()).next().unwrap().unwrap();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.value, ".");
    }

    #[test]
    fn test_max_depth() {
        let deep = "{\"a\":{\"b\":{\"c\":1}}}";
        let options_ok = JsonhOptions::new().with_max_depth(3);
        assert!(tokenize(deep, options_ok).collect::<Result<Vec<_>, _>>().is_ok());

        let options_fail = JsonhOptions::new().with_max_depth(2);
        let err = tokenize(deep, options_fail)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(err, Error::DepthExceeded { .. }));
    }

    #[test]
    fn test_nestable_block_comments_v2() {
        let src = "/* */\n/=* *=/\n0";
        let toks: Vec<_> = tokenize(src, JsonhOptions::new())
            .map(|r| r.unwrap())
            .collect();
        let comments: Vec<_> = toks
            .iter()
            .filter(|t| t.kind == TokenKind::Comment)
            .map(|t| t.value.clone())
            .collect();
        assert_eq!(comments, vec![" ".to_string(), " ".to_string()]);
        assert!(toks.iter().any(|t| t.kind == TokenKind::Number && t.value == "0"));
    }

    #[test]
    fn test_nestable_block_comments_rejected_under_v1() {
        let options = JsonhOptions::new().with_version(JsonhVersion::V1);
        let err = tokenize("/=* *=/", options)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(err, Error::UnexpectedCharacter { .. }));
    }

    #[test]
    fn test_multiquote_indentation_stripping() {
        let tok = tokenize("\"\"\"  \n  hello world\n  \"\"\"", JsonhOptions::new())
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.value, "hello world");
    }

    #[test]
    fn test_multiquote_no_stripping_without_trailing_pattern() {
        let tok = tokenize("\"\"\"\n  hello world  \"\"\"", JsonhOptions::new())
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.value, "\n  hello world  ");
    }

    #[test]
    fn test_parse_single_element_rejects_trailing_content() {
        let options = JsonhOptions::new().with_parse_single_element(true);
        let err = tokenize("\"a\" \"b\"", options)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(err, Error::ExpectedSingleElement { .. }));
    }

    #[test]
    fn test_incomplete_inputs_closes_containers() {
        let options = JsonhOptions::new().with_incomplete_inputs(true);
        let toks = kinds_with("{\"a\": [1, 2", options);
        assert_eq!(
            toks,
            vec![
                TokenKind::StartObject,
                TokenKind::PropertyName,
                TokenKind::StartArray,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::EndArray,
                TokenKind::EndObject,
            ]
        );
    }

    #[test]
    fn test_unescape_unicode_surrogate_pair_matches_single_escape() {
        assert_eq!(unescape("\\U0001F47D").unwrap(), "\u{1F47D}");
        assert_eq!(unescape("\\uD83D\\uDC7D").unwrap(), "\u{1F47D}");
    }
}
