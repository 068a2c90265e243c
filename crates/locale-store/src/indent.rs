/// Indent width of a pretty-printed locale file.
///
/// The width is detected from the first nested key line rather than
/// configured, so a rewrite never changes a file's existing style.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndentWidth {
    Two,
    Four,
}

impl IndentWidth {
    /// Detect the indent width from file content.
    ///
    /// Looks at the first line that starts with spaces followed by a quoted
    /// key: 4 or more leading spaces means [`IndentWidth::Four`], anything
    /// else (including a file with no nested lines at all) means
    /// [`IndentWidth::Two`].
    pub fn detect(content: &str) -> Self {
        for line in content.lines() {
            let spaces = line.len() - line.trim_start_matches(' ').len();
            if spaces > 0 && line[spaces..].starts_with('"') {
                return if spaces >= 4 { Self::Four } else { Self::Two };
            }
        }
        Self::Two
    }

    /// The indent as the literal string written before each nested line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Two => "  ",
            Self::Four => "    ",
        }
    }
}
