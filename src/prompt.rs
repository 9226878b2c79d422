//! Interactive prompt input.

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a> {
    /// Blank line, ask again.
    Empty,
    Quit,
    /// Look up this name, exactly as typed.
    Lookup(&'a str),
}

/// Classify one prompt line. Whitespace only matters for spotting blank
/// lines and the quit words; a name is passed on untouched.
pub fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Empty,
        "quit" | "exit" => Input::Quit,
        _ => Input::Lookup(line),
    }
}
