//! Reusable UI components for the assessment view

mod analysis_panel;
mod questionnaire;
mod results_panel;
mod upload_card;
mod voice_card;

pub use analysis_panel::AnalysisPanel;
pub use questionnaire::QuestionnaireCard;
pub use results_panel::ResultsPanel;
pub use upload_card::PhysiologicalCard;
pub use voice_card::VoiceCard;
