//! Run Transcript
//!
//! Append-only record of one ReAct run: each entry pairs a raw model
//! response with the observation produced by dispatching its action.
//! Scoped to a single `run` call and discarded with it, never persisted.

/// One loop iteration's response/observation pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub response: String,
    pub observation: String,
}

/// Ordered, strictly-growing transcript of one run
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one iteration. Prior entries are never rewritten.
    pub fn push(&mut self, response: impl Into<String>, observation: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            response: response.into(),
            observation: observation.into(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the accumulated context appended to the base prompt:
    /// `\n{response}\nObservation: {observation}` per entry.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push('\n');
            out.push_str(&entry.response);
            out.push_str("\nObservation: ");
            out.push_str(&entry.observation);
        }
        out
    }
}
