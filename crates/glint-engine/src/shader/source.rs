use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::ShaderStage;

const MARKER: &str = "#shader";

/// Vertex + fragment source text split out of one resource file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderProgramSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgramSource {
    /// Splits `text` on `#shader vertex` / `#shader fragment` marker lines.
    ///
    /// Lines end at `\n` only. A `\r` before it stays part of the line, so
    /// CRLF text keeps its `\r\n` endings in the output.
    pub fn parse_str(text: &str) -> Self {
        let mut splitter = Splitter::default();
        for line in text.split_inclusive('\n') {
            splitter.feed(line.strip_suffix('\n').unwrap_or(line));
        }
        splitter.finish()
    }

    /// Like [`parse_str`](Self::parse_str), reading lines from `reader`.
    ///
    /// A read error ends the input early; lines gathered so far are kept.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        let mut splitter = Splitter::default();
        for line in reader.split(b'\n') {
            match line {
                Ok(line) => splitter.feed(&String::from_utf8_lossy(&line)),
                Err(err) => {
                    log::warn!("shader source read stopped early: {err}");
                    break;
                }
            }
        }
        splitter.finish()
    }

    /// Returns the source for `stage`.
    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.fragment.is_empty()
    }
}

/// Reads and splits the shader resource at `path`.
///
/// Lenient: a file that cannot be opened reads as empty, producing
/// two empty sources. The failure is only logged; the compile step is where
/// the empty program gets rejected.
pub fn parse_shader(path: impl AsRef<Path>) -> ShaderProgramSource {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => {
            let source = ShaderProgramSource::from_reader(BufReader::new(file));
            log::debug!(
                "parsed {}: vertex {} bytes, fragment {} bytes",
                path.display(),
                source.vertex.len(),
                source.fragment.len()
            );
            source
        }
        Err(err) => {
            log::warn!("cannot open shader resource {}: {err}", path.display());
            ShaderProgramSource::default()
        }
    }
}

#[derive(Default)]
struct Splitter {
    active: Option<ShaderStage>,
    out: ShaderProgramSource,
}

impl Splitter {
    fn feed(&mut self, line: &str) {
        if line.contains(MARKER) {
            // A marker naming neither stage keeps the current section.
            if line.contains("vertex") {
                self.active = Some(ShaderStage::Vertex);
            } else if line.contains("fragment") {
                self.active = Some(ShaderStage::Fragment);
            }
            return;
        }

        let target = match self.active {
            Some(ShaderStage::Vertex) => &mut self.out.vertex,
            Some(ShaderStage::Fragment) => &mut self.out.fragment,
            // Before the first marker: dropped.
            None => return,
        };
        target.push_str(line);
        target.push('\n');
    }

    fn finish(self) -> ShaderProgramSource {
        self.out
    }
}
