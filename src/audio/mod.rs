//! Local playback of the voice recording before submission.

mod playback;

pub use playback::{PreviewState, VoicePreview};
