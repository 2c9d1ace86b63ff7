//! Assessment form data: uploads, questionnaire ratings, and backend results.

mod result;
mod types;

pub use result::{AnalysisOutcome, AnalysisResult};
pub use types::{AssessmentInput, UploadedFile, DASS21_QUESTIONS, MAX_RATING, QUESTION_COUNT};
