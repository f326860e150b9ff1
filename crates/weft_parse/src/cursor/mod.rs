//! Input cursor.
//!
//! Positions are byte offsets into the input and always sit on a `char`
//! boundary. Parsers that fail put the cursor back where they found it,
//! usually through [`Cursor::position`] / [`Cursor::set_position`].

/// Cursor over a borrowed input string.
#[derive(Clone, Debug)]
pub struct Cursor<'i> {
    input: &'i str,
    pos: usize,
}

impl<'i> Cursor<'i> {
    pub fn new(input: &'i str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// The whole input, independent of the position.
    #[inline]
    pub fn input(&self) -> &'i str {
        self.input
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move to a position previously returned by [`Cursor::position`].
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            self.input.is_char_boundary(pos),
            "cursor position {pos} is not a char boundary"
        );
        self.pos = pos;
    }

    /// Unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'i str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `prefix` if the input continues with it.
    #[inline]
    pub fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consume `len` bytes; `len` must end on a char boundary.
    #[inline]
    pub fn advance(&mut self, len: usize) {
        self.set_position(self.pos + len);
    }

    /// Input between two positions.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'i str {
        self.input.get(start..end).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
