//! Line and column lookup for spans.

use plox_ir::Span;

/// Byte offset of every line start, for repeated line lookups on one source.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[0] = 0`; `offsets[n]` is the byte after the n-th newline.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column); the column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets.get((line - 1) as usize).copied().unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// 1-based line on which `span` starts.
///
/// For repeated lookups, build a [`LineOffsetTable`] instead.
pub fn line_number(source: &str, span: Span) -> u32 {
    let end = (span.start as usize).min(source.len());
    let newlines = source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count();
    u32::try_from(newlines).unwrap_or(u32::MAX - 1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_number_per_line() {
        let source = "line1\nline2\nline3";
        assert_eq!(line_number(source, Span::new(0, 5)), 1);
        assert_eq!(line_number(source, Span::new(6, 11)), 2);
        assert_eq!(line_number(source, Span::new(12, 17)), 3);
    }

    #[test]
    fn line_number_past_end_clamps() {
        assert_eq!(line_number("a\nb", Span::point(99)), 2);
    }

    #[test]
    fn table_agrees_with_scan() {
        let source = "var x = 1;\n\nprint x;\n{ print \"a\nb\"; }";
        let table = LineOffsetTable::build(source);
        for offset in 0..=u32::try_from(source.len()).unwrap_or(0) {
            assert_eq!(
                table.line_from_offset(offset),
                line_number(source, Span::point(offset)),
                "offset {offset}"
            );
        }
        assert_eq!(table.line_count(), 5);
    }

    #[test]
    fn columns_count_characters() {
        let source = "abc\n\u{e9}x = 1";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
        assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
        // 'x' sits after a two-byte character
        assert_eq!(table.offset_to_line_col(source, 6), (2, 2));
    }
}
