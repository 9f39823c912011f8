//! Output writer with indentation tracking
//!
//! Builds mock bodies line by line; continuation lines of a call chain are written one level deeper than the call
//! they continue.

/// Writer that tracks indentation and builds generated C++ source
pub struct MockWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Number of spaces per indentation level
    indent_width: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl MockWriter {
    /// Create a new writer indenting by `indent_width` spaces per level
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            self.output.push_str(&" ".repeat(self.indent_level * self.indent_width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write `{header} {`, run `body` one level deeper, then write the closing `}`.
    pub fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        self.writeln(&format!("{header} {{"));
        self.indent();
        body(self);
        self.dedent();
        self.writeln("}");
    }

    /// Get current indentation level
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_writer_empty_output() {
        let writer = MockWriter::new(4);
        assert_eq!(writer.current_indent(), 0);
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_write_empty_string_does_not_indent() {
        let mut writer = MockWriter::new(4);
        writer.indent();
        writer.write("");
        writer.newline();
        assert_eq!(writer.finish(), "\n");
    }

    #[test]
    fn test_writeln_multiple() {
        let mut writer = MockWriter::new(4);
        writer.writeln("line1");
        writer.writeln("line2");
        assert_eq!(writer.finish(), "line1\nline2\n");
    }

    #[test]
    fn test_dedent_at_zero_stays_zero() {
        let mut writer = MockWriter::new(4);
        writer.dedent();
        assert_eq!(writer.current_indent(), 0);
    }

    #[test]
    fn test_indent_width_2() {
        let mut writer = MockWriter::new(2);
        writer.indent();
        writer.indent();
        writer.write("text");
        assert_eq!(writer.finish(), "    text");
    }

    #[test]
    fn test_block_nests() {
        let mut writer = MockWriter::new(4);
        writer.block("void f()", |w| {
            w.block("if (x)", |w| w.writeln("return;"));
        });
        assert_eq!(writer.finish(), "void f() {\n    if (x) {\n        return;\n    }\n}\n");
    }
}
