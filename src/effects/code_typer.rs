pub const CODE_TYPE_INTERVAL_MS: u32 = 50;

/// Types a fixed listing one character per tick, line by line.
#[derive(Debug, Clone)]
pub struct CodeTyper {
    lines: Vec<Vec<char>>,
    line: usize,
    column: usize,
    text: String,
}

impl CodeTyper {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|line| line.as_ref().chars().collect())
                .collect(),
            line: 0,
            column: 0,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        match self.lines.get(self.line) {
            Some(current) => self.column >= current.len() && self.line + 1 >= self.lines.len(),
            None => true,
        }
    }

    /// Emits the next character or line break. Returns `false` once the
    /// listing is complete.
    pub fn tick(&mut self) -> bool {
        let Some(current) = self.lines.get(self.line) else {
            return false;
        };

        if let Some(&next) = current.get(self.column) {
            self.text.push(next);
            self.column += 1;
            return true;
        }

        if self.line + 1 < self.lines.len() {
            self.text.push('\n');
            self.line += 1;
            self.column = 0;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_listing_with_line_breaks() {
        let lines = ["fn a() {", "", "}"];
        let mut typer = CodeTyper::new(&lines);

        while typer.tick() {}

        assert_eq!(typer.text(), lines.join("\n"));
        assert!(typer.is_done());
        assert!(!typer.tick());
    }

    #[test]
    fn one_character_per_tick() {
        let mut typer = CodeTyper::new(&["ab", "c"]);

        assert!(typer.tick());
        assert_eq!(typer.text(), "a");
        assert!(typer.tick());
        assert!(typer.tick());
        assert_eq!(typer.text(), "ab\n");
        assert!(!typer.is_done());
        assert!(typer.tick());
        assert_eq!(typer.text(), "ab\nc");
        assert!(typer.is_done());
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut typer = CodeTyper::new(&["// 🚀 ñ"]);
        while typer.tick() {}
        assert_eq!(typer.text(), "// 🚀 ñ");
    }

    #[test]
    fn empty_listing_is_done_immediately() {
        let lines: [&str; 0] = [];
        let mut typer = CodeTyper::new(&lines);
        assert!(typer.is_done());
        assert!(!typer.tick());
    }
}
