//! Line and column lookup for byte offsets.
//!
//! For repeated lookups on the same source, use [`LineOffsetTable`], which
//! pre-computes line starts for O(log L) lookup instead of O(n) scanning.

/// Pre-computed line offset table.
///
/// ```
/// use weft_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\r\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 13), (3, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut offsets = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => offsets.push(i + 1),
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    offsets.push(i + 2);
                    i += 1;
                }
                b'\r' => offsets.push(i + 1),
                _ => {}
            }
            i += 1;
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: usize) -> usize {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        line_idx + 1
    }

    /// 1-based (line, column); the column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets.get(line - 1).copied().unwrap_or(0);
        let col = source
            .get(line_start..offset.min(source.len()))
            .map_or(0, |text| text.chars().count());
        (line, col + 1)
    }

    /// Byte offset where a 1-based line starts.
    pub fn line_start_offset(&self, line: usize) -> Option<usize> {
        line.checked_sub(1).and_then(|idx| self.offsets.get(idx).copied())
    }

    /// Text of a 1-based line without its terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> Option<&'s str> {
        let start = self.line_start_offset(line)?;
        let rest = source.get(start..)?;
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        Some(&rest[..end])
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// 1-based (line, column) without building a table.
pub fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    LineOffsetTable::build(source.get(..offset).unwrap_or(source)).offset_to_line_col(source, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_from_offset_multiple_lines() {
        let table = LineOffsetTable::build("line1\nline2\nline3");
        assert_eq!(table.line_from_offset(0), 1);
        assert_eq!(table.line_from_offset(5), 1);
        assert_eq!(table.line_from_offset(6), 2);
        assert_eq!(table.line_from_offset(12), 3);
    }

    #[test]
    fn test_offset_to_line_col() {
        let source = "abc\ndefgh\nij";
        assert_eq!(offset_to_line_col(source, 0), (1, 1));
        assert_eq!(offset_to_line_col(source, 2), (1, 3));
        assert_eq!(offset_to_line_col(source, 4), (2, 1));
        assert_eq!(offset_to_line_col(source, 7), (2, 4));
        assert_eq!(offset_to_line_col(source, 11), (3, 2));
    }

    #[test]
    fn test_columns_count_characters() {
        let source = "héllo wörld";
        // 'w' is at byte 7 (é takes two bytes)
        assert_eq!(offset_to_line_col(source, 7), (1, 7));
    }

    #[test]
    fn test_line_endings() {
        let source = "a\r\nb\rc\nd";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_count(), 4);
        assert_eq!(table.line_text(source, 1), Some("a"));
        assert_eq!(table.line_text(source, 2), Some("b"));
        assert_eq!(table.line_text(source, 3), Some("c"));
        assert_eq!(table.line_text(source, 4), Some("d"));
        assert_eq!(table.line_text(source, 5), None);
        assert_eq!(table.line_start_offset(0), None);
    }

    #[test]
    fn test_offset_past_end() {
        let source = "ab";
        assert_eq!(offset_to_line_col(source, 2), (1, 3));
    }
}
