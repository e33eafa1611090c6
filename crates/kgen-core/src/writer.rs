/// Line-oriented sink for generated source text.
///
/// Blocks nest: every `open_block` must be matched by a `close_block`, innermost first.
pub trait CodeWriter {
    /// Write one line at the current indentation.
    fn line(&mut self, text: &str);

    /// Write `header` and indent everything until the matching `close_block`.
    fn open_block(&mut self, header: &str);

    /// Dedent and write `footer`.
    fn close_block(&mut self, footer: &str);

    fn blank(&mut self) {
        self.line("");
    }
}

/// In-memory `CodeWriter` producing a single string.
#[derive(Debug)]
pub struct TextWriter {
    buf: String,
    depth: usize,
    indent: &'static str,
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new("  ")
    }
}

impl TextWriter {
    pub fn new(indent: &'static str) -> Self {
        Self {
            buf: String::new(),
            depth: 0,
            indent,
        }
    }

    /// Consume the writer, returning the text written so far.
    pub fn finish(self) -> String {
        debug_assert_eq!(self.depth, 0, "unclosed block");
        self.buf
    }
}

impl CodeWriter for TextWriter {
    fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(self.indent);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    fn open_block(&mut self, header: &str) {
        self.line(header);
        self.depth += 1;
    }

    fn close_block(&mut self, footer: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(footer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut w = TextWriter::default();
        w.open_block("class A {");
        w.open_block("m() {");
        w.line("return 1;");
        w.close_block("}");
        w.blank();
        w.close_block("}");
        assert_eq!(w.finish(), "class A {\n  m() {\n    return 1;\n  }\n\n}\n");
    }
}
