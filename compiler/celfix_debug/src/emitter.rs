//! Output sinks for the debug writer.
//!
//! [`DebugWriter`](crate::DebugWriter) tracks nesting and line starts; an
//! [`Emitter`] only receives text fragments, line breaks, and the
//! indentation owed at the start of each non-empty line. Renderings are
//! always `\n`-separated with [`INDENT_WIDTH`] spaces per level.

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

/// Receives rendered output.
pub trait Emitter {
    /// Text containing no line breaks.
    fn emit(&mut self, text: &str);

    fn emit_newline(&mut self);

    /// Called once per line, before its first fragment.
    fn emit_indent(&mut self, level: usize);
}

/// Collects a rendering into a `String`.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendering.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        self.buffer.extend(std::iter::repeat_n(' ', level * INDENT_WIDTH));
    }
}

#[cfg(test)]
mod tests;
