/// Submitted command lines with an up/down recall cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    /// `None` when not browsing.
    cursor: Option<usize>,
}

/// Result of moving down through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Not browsing; leave the buffer alone.
    Unchanged,
    Entry(&'a str),
    /// Walked past the newest entry; browsing ends with an empty buffer.
    Cleared,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a trimmed, non-empty line and stops browsing.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() {
            self.entries.push(line.to_string());
        }
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Newest entry first time, then one older each call, stopping at the oldest.
    pub fn up(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(next);
        Some(&self.entries[next])
    }

    pub fn down(&mut self) -> Recall<'_> {
        let Some(i) = self.cursor else {
            return Recall::Unchanged;
        };
        if i + 1 >= self.entries.len() {
            self.cursor = None;
            return Recall::Cleared;
        }
        self.cursor = Some(i + 1);
        Recall::Entry(&self.entries[i + 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> History {
        let mut h = History::new();
        for line in ["a", "b", "c"] {
            h.push(line);
        }
        h
    }

    #[test]
    fn push_skips_blank_and_trims() {
        let mut h = History::new();
        h.push("  ls  ");
        h.push("   ");
        assert_eq!(h.entries(), ["ls"]);
    }

    #[test]
    fn up_clamps_at_oldest() {
        let mut h = abc();
        assert_eq!(h.up(), Some("c"));
        assert_eq!(h.up(), Some("b"));
        assert_eq!(h.up(), Some("a"));
        assert_eq!(h.up(), Some("a"));
    }

    #[test]
    fn up_three_down_two_returns_to_newest() {
        let mut h = abc();
        h.up();
        h.up();
        h.up();
        assert_eq!(h.down(), Recall::Entry("b"));
        assert_eq!(h.down(), Recall::Entry("c"));
        assert_eq!(h.down(), Recall::Cleared);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn down_without_browsing_is_noop() {
        let mut h = abc();
        assert_eq!(h.down(), Recall::Unchanged);
    }

    #[test]
    fn up_on_empty_history() {
        let mut h = History::new();
        assert_eq!(h.up(), None);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn push_resets_cursor() {
        let mut h = abc();
        h.up();
        h.push("d");
        assert_eq!(h.cursor(), None);
        assert_eq!(h.up(), Some("d"));
    }
}
