use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::assessment::UploadedFile;
use crate::{Result, StressCheckError};

/// Playback state of the voice preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    /// No audio playing
    Stopped,
    /// Audio is playing
    Playing,
    /// Audio is paused
    Paused,
}

/// In-app player for the uploaded voice clip.
///
/// Holds at most one sink; loading a new clip or clearing the upload tears
/// the previous sink down first so no stale device handle outlives its clip.
/// The output stream is opened lazily on first play and lives on the UI
/// thread only.
pub struct VoicePreview {
    stream: Option<(OutputStream, OutputStreamHandle)>,
    sink: Option<Sink>,
}

impl Default for VoicePreview {
    fn default() -> Self {
        Self::new()
    }
}

impl VoicePreview {
    pub fn new() -> Self {
        Self {
            stream: None,
            sink: None,
        }
    }

    pub fn state(&self) -> PreviewState {
        match &self.sink {
            None => PreviewState::Stopped,
            Some(sink) if sink.empty() => PreviewState::Stopped,
            Some(sink) if sink.is_paused() => PreviewState::Paused,
            Some(_) => PreviewState::Playing,
        }
    }

    /// Decode and play a clip from the start, replacing any active sink.
    pub fn play(&mut self, file: &UploadedFile) -> Result<()> {
        self.stop();

        if self.stream.is_none() {
            let (stream, handle) = OutputStream::try_default()
                .map_err(|e| StressCheckError::AudioPlayback(e.to_string()))?;
            self.stream = Some((stream, handle));
        }
        let Some((_, handle)) = self.stream.as_ref() else {
            return Err(StressCheckError::AudioPlayback(
                "audio output unavailable".to_string(),
            ));
        };

        let source = Decoder::new(Cursor::new(file.bytes.clone()))
            .map_err(|e| StressCheckError::AudioPlayback(e.to_string()))?;
        let sink =
            Sink::try_new(handle).map_err(|e| StressCheckError::AudioPlayback(e.to_string()))?;
        sink.append(source);
        self.sink = Some(sink);
        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        if let Some(sink) = &self.sink {
            if sink.is_paused() {
                sink.play();
            } else {
                sink.pause();
            }
        }
    }

    /// Stop playback and release the sink. Safe to call when idle.
    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Device-backed playback is not exercised here; these cover the idle
    // lifecycle that must hold on machines without an audio device.

    #[test]
    fn starts_stopped() {
        let preview = VoicePreview::new();
        assert_eq!(preview.state(), PreviewState::Stopped);
    }

    #[test]
    fn stop_when_idle_is_a_noop() {
        let mut preview = VoicePreview::new();
        preview.stop();
        preview.toggle_pause();
        assert_eq!(preview.state(), PreviewState::Stopped);
    }
}
