//! Audible cues for segment transitions.
use std::io::{self, Write};

use crossterm::{execute, style::Print};

/// Ring the terminal bell.
pub fn beep(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Print('\x07'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beep_writes_bell() {
        let mut out = Vec::new();
        beep(&mut out).unwrap();
        assert_eq!(out, b"\x07");
    }
}
