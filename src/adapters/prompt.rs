use crate::core::{OperatorPrompt, PromptContext};
use crate::utils::error::{Result, SnapcutError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Interactive prompt: shows the cleaned section and reads one destination per line.
///
/// End of input is answered with the quit token so a closed stdin stops the
/// run instead of spinning on empty reads.
pub struct TerminalPrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalPrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show_section(&mut self, context: &PromptContext<'_>) -> std::io::Result<()> {
        tracing::debug!("{} section(s) pending", context.pending);
        writeln!(self.output)?;
        writeln!(self.output, "--- Section {} ---", context.section_number)?;
        writeln!(self.output, "{}", context.cleaned)?;
        writeln!(self.output, "{}", "-".repeat(50))
    }
}

impl<R: BufRead, W: Write> OperatorPrompt for TerminalPrompt<R, W> {
    fn request_destination(&mut self, context: &PromptContext<'_>) -> Result<String> {
        self.show_section(context).map_err(SnapcutError::PromptError)?;

        loop {
            write!(
                self.output,
                "Enter directory path and file name for section {} (or '{}' to quit): ",
                context.section_number, context.quit_token
            )
            .and_then(|_| self.output.flush())
            .map_err(SnapcutError::PromptError)?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(SnapcutError::PromptError)?;
            if read == 0 {
                tracing::debug!("Input closed, treating as quit");
                return Ok(context.quit_token.to_string());
            }

            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            writeln!(self.output, "File path cannot be empty!").map_err(SnapcutError::PromptError)?;
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            tracing::warn!("Could not write to terminal: {}", e);
        }
    }
}

/// Batch prompt: answers with destinations supplied up front, then quits.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    destinations: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new<I, T>(destinations: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            destinations: destinations.into_iter().map(Into::into).collect(),
        }
    }

    /// One destination per line; blank lines and `#` comments are ignored.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn remaining(&self) -> usize {
        self.destinations.len()
    }
}

impl OperatorPrompt for ScriptedPrompt {
    fn request_destination(&mut self, context: &PromptContext<'_>) -> Result<String> {
        match self.destinations.pop_front() {
            Some(destination) => {
                tracing::info!(
                    "Section {} -> {} (batch)",
                    context.section_number,
                    destination
                );
                Ok(destination)
            }
            None => {
                tracing::info!(
                    "Batch destinations exhausted at section {}",
                    context.section_number
                );
                Ok(context.quit_token.to_string())
            }
        }
    }

    fn notify(&mut self, message: &str) {
        tracing::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn context(cleaned: &str) -> PromptContext<'_> {
        PromptContext {
            section_number: 3,
            cleaned,
            pending: 5,
            quit_token: "q",
        }
    }

    #[test]
    fn test_terminal_prompt_shows_section_and_trims_answer() {
        let mut prompt = TerminalPrompt::new(Cursor::new("  lists/map  \n"), Vec::new());

        let answer = prompt.request_destination(&context("hello\nworld")).unwrap();
        let shown = String::from_utf8(prompt.into_output()).unwrap();

        assert_eq!(answer, "lists/map");
        assert!(shown.contains("--- Section 3 ---\nhello\nworld\n"));
        assert!(shown.contains(&"-".repeat(50)));
        assert!(shown.contains("for section 3 (or 'q' to quit)"));
    }

    #[test]
    fn test_terminal_prompt_reasks_on_empty_input() {
        let mut prompt = TerminalPrompt::new(Cursor::new("\n   \nbase/one\n"), Vec::new());

        let answer = prompt.request_destination(&context("x")).unwrap();
        let shown = String::from_utf8(prompt.into_output()).unwrap();

        assert_eq!(answer, "base/one");
        assert_eq!(shown.matches("File path cannot be empty!").count(), 2);
    }

    #[test]
    fn test_terminal_prompt_eof_quits() {
        let mut prompt = TerminalPrompt::new(Cursor::new(""), Vec::new());
        assert_eq!(prompt.request_destination(&context("x")).unwrap(), "q");
    }

    #[test]
    fn test_scripted_prompt_from_lines() {
        let mut prompt = ScriptedPrompt::from_lines("# batch\nfirst\n\n  second  \n");
        assert_eq!(prompt.remaining(), 2);

        assert_eq!(prompt.request_destination(&context("x")).unwrap(), "first");
        assert_eq!(prompt.request_destination(&context("x")).unwrap(), "second");
        assert_eq!(prompt.request_destination(&context("x")).unwrap(), "q");
    }
}
