use crate::core::cleaner::{clean_section, is_blank};
use crate::core::{DocumentStore, OperatorPrompt, OutputSink, PromptContext};
use crate::domain::model::{Document, PendingSection, RunOutcome, RunSummary, WrittenUnit};
use crate::utils::error::Result;

pub const DEFAULT_QUIT_TOKEN: &str = "q";

/// Moves workbench sections one at a time into the output sink.
///
/// The workbench is re-read at the start of every iteration and again right
/// before the remainder is saved, so edits made while the operator is being
/// prompted survive the removal.
pub struct ConsumptionLoop<S: DocumentStore, P: OperatorPrompt, O: OutputSink> {
    store: S,
    prompt: P,
    sink: O,
    quit_token: String,
}

enum Step {
    Written(WrittenUnit),
    Skipped,
    Stopped,
}

impl<S: DocumentStore, P: OperatorPrompt, O: OutputSink> ConsumptionLoop<S, P, O> {
    pub fn new(store: S, prompt: P, sink: O) -> Self {
        Self {
            store,
            prompt,
            sink,
            quit_token: DEFAULT_QUIT_TOKEN.to_string(),
        }
    }

    pub fn with_quit_token(mut self, quit_token: impl Into<String>) -> Self {
        self.quit_token = quit_token.into();
        self
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary {
            outcome: RunOutcome::Exhausted,
            written: Vec::new(),
            skipped: 0,
            failed_attempts: 0,
        };
        let mut section_number = 1;

        loop {
            let document = self.store.load()?;
            let sections = document.sections();

            let Some(first) = sections.first() else {
                tracing::info!("No more sections to process");
                self.prompt.notify("No more sections to process.");
                break;
            };

            let cleaned = clean_section(first);
            match self.step(section_number, &cleaned, sections.len(), &mut summary)? {
                Step::Written(unit) => {
                    self.prompt.notify(&format!(
                        "Successfully processed section {} -> {}",
                        section_number, unit.artifact
                    ));
                    summary.written.push(unit);
                }
                Step::Skipped => summary.skipped += 1,
                Step::Stopped => {
                    tracing::info!(
                        "Stopped by operator with {} section(s) remaining",
                        sections.len()
                    );
                    summary.outcome = RunOutcome::Stopped;
                    break;
                }
            }
            section_number += 1;
        }

        Ok(summary)
    }

    fn step(
        &mut self,
        section_number: usize,
        cleaned: &str,
        pending: usize,
        summary: &mut RunSummary,
    ) -> Result<Step> {
        if is_blank(cleaned) {
            tracing::warn!("Skipping empty section {}", section_number);
            self.prompt
                .notify(&format!("Skipping empty section {}", section_number));
            self.remove_first_section()?;
            return Ok(Step::Skipped);
        }

        loop {
            let context = PromptContext {
                section_number,
                cleaned,
                pending,
                quit_token: &self.quit_token,
            };
            let destination = self.prompt.request_destination(&context)?;

            if self.is_quit(&destination) {
                return Ok(Step::Stopped);
            }

            tracing::debug!("Writing section {} to '{}'", section_number, destination);
            match self.sink.write_unit(&destination, cleaned) {
                Ok(artifact) => {
                    self.remove_first_section()?;
                    tracing::info!("Section {} written to {}", section_number, artifact);
                    return Ok(Step::Written(WrittenUnit {
                        section: section_number,
                        destination,
                        artifact,
                    }));
                }
                Err(e) if e.is_recoverable() => {
                    summary.failed_attempts += 1;
                    tracing::warn!("Section {} not written: {}", section_number, e);
                    self.prompt
                        .notify(&format!("Error creating file: {}", e.user_friendly_message()));
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn remove_first_section(&self) -> Result<()> {
        let current = self.store.load()?;
        self.store.save(&current.without_first_section())
    }

    fn is_quit(&self, reply: &str) -> bool {
        reply.trim().eq_ignore_ascii_case(&self.quit_token)
    }

    pub fn into_parts(self) -> (S, P, O) {
        (self.store, self.prompt, self.sink)
    }
}

/// Describes every section as the loop would see it, without touching anything.
pub fn preview(document: &Document) -> Vec<PendingSection> {
    document
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let cleaned = clean_section(section);
            PendingSection {
                number: index + 1,
                has_delimiter: section.delimiter.is_some(),
                line_count: section.lines.len(),
                would_skip: is_blank(&cleaned),
                cleaned,
            }
        })
        .collect()
}
