use std::path::Path;

use crate::{Result, StressCheckError};

/// Number of questionnaire items (DASS-21 stress subscale).
pub const QUESTION_COUNT: usize = 7;

/// Highest selectable rating per item.
pub const MAX_RATING: u8 = 3;

/// The seven stress-subscale statements, rated 0 = Never .. 3 = Almost Always.
pub const DASS21_QUESTIONS: [&str; QUESTION_COUNT] = [
    "I found it hard to wind down",
    "I tended to over-react to situations",
    "I felt that I was using a lot of nervous energy",
    "I found myself getting agitated",
    "I found it difficult to relax",
    "I was intolerant of anything that kept me from getting on with what I was doing",
    "I felt that I was rather touchy",
];

/// A file the user picked for submission, held entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes,
            content_type: content_type.into(),
        }
    }

    /// Read a picked file from disk, guessing the content type from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StressCheckError::FileRead("file has no usable name".to_string()))?
            .to_string();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        Ok(Self {
            name,
            bytes,
            content_type,
        })
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

/// Everything the user has entered so far. Lives only in the view; dropped on
/// exit or explicit clear.
#[derive(Debug, Clone, Default)]
pub struct AssessmentInput {
    /// Physiological signal file (CSV/JSON). Required for submission.
    pub physiological: Option<UploadedFile>,

    /// DASS-21 ratings, one per statement, each in 0..=3.
    pub responses: [u8; QUESTION_COUNT],

    /// Optional voice recording (wav/mp3/m4a/webm).
    pub voice: Option<UploadedFile>,
}

impl AssessmentInput {
    pub fn set_rating(&mut self, index: usize, value: u8) {
        if index < QUESTION_COUNT {
            self.responses[index] = value.min(MAX_RATING);
        }
    }

    /// True once at least one statement has a non-zero rating.
    pub fn has_answers(&self) -> bool {
        self.responses.iter().any(|&r| r > 0)
    }

    /// Submission precondition: physiological file plus at least one answer.
    /// Voice audio never affects readiness.
    pub fn is_ready(&self) -> bool {
        self.physiological.is_some() && self.has_answers()
    }

    /// Header-level completion indicator: file 40%, answers 40%, voice 20%.
    pub fn completion_percent(&self) -> u8 {
        let mut completed = 0;
        if self.physiological.is_some() {
            completed += 40;
        }
        if self.has_answers() {
            completed += 40;
        }
        if self.voice.is_some() {
            completed += 20;
        }
        completed
    }

    /// Ratings as the comma-separated wire field, e.g. `"0,1,2,0,3,0,1"`.
    pub fn responses_field(&self) -> String {
        self.responses
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn clear_voice(&mut self) {
        self.voice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_file() -> UploadedFile {
        UploadedFile::new("hrv.csv", b"t,bpm\n0,61\n".to_vec(), "text/csv")
    }

    fn wav_file() -> UploadedFile {
        UploadedFile::new("voice.wav", vec![0u8; 16], "audio/wav")
    }

    #[test]
    fn not_ready_without_file() {
        let mut input = AssessmentInput::default();
        input.set_rating(0, 2);
        assert!(!input.is_ready());
    }

    #[test]
    fn not_ready_without_answers() {
        let input = AssessmentInput {
            physiological: Some(csv_file()),
            ..Default::default()
        };
        assert!(!input.is_ready());
    }

    #[test]
    fn ready_with_file_and_any_answer() {
        let mut input = AssessmentInput {
            physiological: Some(csv_file()),
            ..Default::default()
        };
        input.set_rating(6, 1);
        assert!(input.is_ready());
    }

    #[test]
    fn voice_never_affects_readiness() {
        let mut input = AssessmentInput {
            voice: Some(wav_file()),
            ..Default::default()
        };
        assert!(!input.is_ready());

        input.physiological = Some(csv_file());
        input.set_rating(0, 3);
        assert!(input.is_ready());
        input.clear_voice();
        assert!(input.is_ready());
    }

    #[test]
    fn ratings_are_clamped() {
        let mut input = AssessmentInput::default();
        input.set_rating(2, 9);
        assert_eq!(input.responses[2], MAX_RATING);
        // Out-of-range index is ignored
        input.set_rating(QUESTION_COUNT, 1);
        assert!(input.responses.iter().filter(|&&r| r > 0).count() == 1);
    }

    #[test]
    fn completion_accumulates() {
        let mut input = AssessmentInput::default();
        assert_eq!(input.completion_percent(), 0);
        input.physiological = Some(csv_file());
        assert_eq!(input.completion_percent(), 40);
        input.set_rating(1, 2);
        assert_eq!(input.completion_percent(), 80);
        input.voice = Some(wav_file());
        assert_eq!(input.completion_percent(), 100);
    }

    #[test]
    fn responses_field_joins_with_commas() {
        let mut input = AssessmentInput::default();
        input.set_rating(1, 1);
        input.set_rating(4, 3);
        assert_eq!(input.responses_field(), "0,1,0,0,3,0,0");
    }
}
