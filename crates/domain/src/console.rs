//! Line-oriented output used by the sample event handlers.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Where handlers write their lines.
///
/// `Console::stdout()` prints; `Console::capture()` keeps lines in memory so
/// callers can inspect exactly what was written and in which order.
#[derive(Debug, Clone, Default)]
pub struct Console {
    captured: Option<Arc<Mutex<Vec<String>>>>,
}

impl Console {
    pub fn stdout() -> Self {
        Self { captured: None }
    }

    pub fn capture() -> Self {
        Self {
            captured: Some(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Writes a single line.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        match &self.captured {
            Some(lines) => {
                lines
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(line.to_string());
                Ok(())
            }
            None => writeln!(std::io::stdout().lock(), "{line}"),
        }
    }

    /// Drops every captured line. No effect on stdout.
    pub fn clear(&self) {
        if let Some(lines) = &self.captured {
            lines.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }

    /// Returns the captured lines. Always empty for stdout.
    pub fn lines(&self) -> Vec<String> {
        self.captured
            .as_ref()
            .map(|lines| lines.lock().unwrap_or_else(PoisonError::into_inner).clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_keeps_lines_in_order() {
        let console = Console::capture();
        console.write_line("one").unwrap();
        console.write_line("two").unwrap();
        assert_eq!(console.lines(), vec!["one", "two"]);
    }

    #[test]
    fn clones_share_the_buffer() {
        let console = Console::capture();
        let clone = console.clone();
        clone.write_line("shared").unwrap();
        assert_eq!(console.lines(), vec!["shared"]);
    }

    #[test]
    fn clear_empties_shared_buffer() {
        let console = Console::capture();
        let clone = console.clone();
        console.write_line("old").unwrap();

        clone.clear();
        console.write_line("new").unwrap();

        assert_eq!(console.lines(), vec!["new"]);
    }

    #[test]
    fn stdout_has_no_captured_lines() {
        let console = Console::stdout();
        console.write_line("printed").unwrap();
        assert!(console.lines().is_empty());
    }
}
