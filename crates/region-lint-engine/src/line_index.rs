//! Byte offset to line/column conversion for diagnostics.

use rowan::TextSize;

/// 1-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

/// Start offsets of every line in a source text.
#[derive(Debug)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, line_starts }
    }

    /// Position of `offset`. Offsets past the end clamp to the end of text.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = usize::from(offset).min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = self
            .text
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());

        LineCol {
            line: line as u32 + 1,
            column: column as u32 + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1, 1)]
    #[case(3, 1, 4)]
    #[case(4, 2, 1)]
    #[case(6, 2, 3)]
    #[case(8, 3, 1)]
    #[case(100, 3, 1)]
    fn positions(#[case] offset: u32, #[case] line: u32, #[case] column: u32) {
        let index = LineIndex::new("abc\nde\r\n");
        assert_eq!(
            index.line_col(TextSize::from(offset)),
            LineCol { line, column }
        );
    }

    #[test]
    fn columns_count_characters() {
        let text = "// é\n#region";
        let index = LineIndex::new(text);
        let offset = text.find('#').unwrap() as u32;

        assert_eq!(
            index.line_col(TextSize::from(offset)),
            LineCol { line: 2, column: 1 }
        );
        assert_eq!(
            index.line_col(TextSize::from(5)),
            LineCol { line: 1, column: 5 }
        );
    }
}
