use crate::utils::line_col;
use crate::CfgError;

/// A position inside one statement of the preprocessed source.
///
/// The cursor never reads past `end`, but keeps the whole source around so
/// that errors can report line and column in terms of the input file.
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str, start: usize, end: usize) -> Self {
        Cursor { src, pos: start, end }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..self.end]
    }

    /// Source text between `start` and the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance over `s`, which the caller has checked with `starts_with`.
    pub(crate) fn eat(&mut self, s: &str) {
        debug_assert!(self.starts_with(s));
        self.pos += s.len();
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    /// Skips whitespace and commas, the separators between array items.
    pub(crate) fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() && c != ',' {
                break;
            }
            self.bump();
        }
    }

    /// Consume characters while `pred` holds and return them.
    pub(crate) fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
        self.slice_from(start)
    }

    pub(crate) fn location(&self, offset: usize) -> (usize, usize) {
        line_col(self.src, offset)
    }

    pub(crate) fn syntax_error(
        &self,
        offset: usize,
        message: String,
        hint: Option<&str>,
        code: u32,
    ) -> CfgError {
        let (line, column) = self.location(offset);
        CfgError::SyntaxError {
            message,
            line,
            column,
            hint: hint.map(Into::into),
            code: Some(code),
        }
    }
}
