/// Terminal scrollback: append-only except for an explicit clear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scrollback {
    lines: Vec<String>,
    /// Bumped on every clear so renderers can tell a clear from a quiet period.
    generation: u64,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// One scrollback line per `\n`-separated line of `text`.
    pub fn print_text(&mut self, text: &str) {
        for line in text.split('\n') {
            self.print(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.generation += 1;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
