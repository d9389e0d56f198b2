//! # Text-to-Speech
//!
//! A fire-and-forget `speak(text, locale)` capability. Text is passed as
//! data to the synthesizer process, so nothing needs escaping.
//!
//! Two implementations:
//! - [`CommandSpeaker`]: drives an external synthesizer (`espeak-ng`, `say`, ...)
//! - [`NoopSpeaker`]: logs a warning; used when no synthesizer is available

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};

use log::{debug, info, warn};

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_RATE: f32 = 0.8;

/// espeak's default speed in words per minute, scaled by `rate`.
const ESPEAK_BASE_WPM: f32 = 175.0;

pub trait Speaker: Send + Sync {
    fn name(&self) -> &str;

    /// Speaks `text`, cancelling whatever is currently being spoken.
    /// Best-effort: failures are logged, never returned.
    fn speak(&self, text: &str, locale: &str);
}

/// Drops the "→ " marker some example sentences carry.
pub fn clean_text(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed.strip_prefix("→ ").unwrap_or(trimmed).trim()
}

pub struct NoopSpeaker;

impl Speaker for NoopSpeaker {
    fn name(&self) -> &str {
        "none"
    }

    fn speak(&self, text: &str, _locale: &str) {
        warn!("TTS not supported, skipping {:?}", clean_text(text));
    }
}

/// Runs an external synthesizer, one child process per utterance.
pub struct CommandSpeaker {
    program: String,
    rate: f32,
    current: Mutex<Option<Child>>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>, rate: f32) -> Self {
        Self {
            program: program.into(),
            rate,
            current: Mutex::new(None),
        }
    }

    /// Arguments for the configured program. `say` (macOS) takes a rate in
    /// words per minute; espeak-style programs take a voice and speed.
    pub fn args(&self, text: &str, locale: &str) -> Vec<String> {
        let wpm = (ESPEAK_BASE_WPM * self.rate).round() as u32;
        let binary = self
            .program
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.program);
        if binary == "say" {
            vec!["-r".to_string(), wpm.to_string(), text.to_string()]
        } else {
            vec![
                "-v".to_string(),
                locale.to_ascii_lowercase(),
                "-s".to_string(),
                wpm.to_string(),
                text.to_string(),
            ]
        }
    }

    fn cancel_current(slot: &mut Option<Child>) {
        if let Some(mut child) = slot.take() {
            // Already exited is fine.
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Speaker for CommandSpeaker {
    fn name(&self) -> &str {
        &self.program
    }

    fn speak(&self, text: &str, locale: &str) {
        let text = clean_text(text);
        if text.is_empty() {
            return;
        }

        let mut current = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Self::cancel_current(&mut current);

        let spawned = Command::new(&self.program)
            .args(self.args(text, locale))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                debug!("Speaking {:?} via {} (pid {})", text, self.program, child.id());
                *current = Some(child);
            }
            Err(e) => warn!("Failed to start TTS program '{}': {}", self.program, e),
        }
    }
}

/// Synthesizers probed on `PATH` when none is configured.
const KNOWN_PROGRAMS: [&str; 3] = ["espeak-ng", "espeak", "say"];

fn find_on_path(program: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

/// Picks a speaker: the configured command, else the first known
/// synthesizer on `PATH`, else [`NoopSpeaker`].
pub fn build_speaker(command: Option<&str>, rate: f32) -> Arc<dyn Speaker> {
    if let Some(program) = command.map(str::trim).filter(|p| !p.is_empty()) {
        info!("Using configured TTS program: {}", program);
        return Arc::new(CommandSpeaker::new(program, rate));
    }
    match KNOWN_PROGRAMS.iter().find_map(|p| find_on_path(p)) {
        Some(path) => {
            info!("Using TTS program found on PATH: {}", path.display());
            Arc::new(CommandSpeaker::new(path.to_string_lossy(), rate))
        }
        None => {
            warn!("No TTS program found, speech disabled");
            Arc::new(NoopSpeaker)
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        if let Ok(current) = self.current.get_mut() {
            Self::cancel_current(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_arrow_marker() {
        assert_eq!(clean_text("→ He left early."), "He left early.");
        assert_eq!(clean_text("  plain  "), "plain");
        assert_eq!(clean_text("a → b"), "a → b");
    }

    #[test]
    fn test_espeak_args() {
        let speaker = CommandSpeaker::new("/usr/bin/espeak-ng", DEFAULT_RATE);
        assert_eq!(
            speaker.args("hello", "en-US"),
            vec!["-v", "en-us", "-s", "140", "hello"]
        );
    }

    #[test]
    fn test_say_args() {
        let speaker = CommandSpeaker::new("say", 1.0);
        assert_eq!(speaker.args("it's \"quoted\"", "en-US"), vec!["-r", "175", "it's \"quoted\""]);
    }

    #[test]
    fn test_missing_program_is_silent() {
        let speaker = CommandSpeaker::new("definitely-not-a-tts-binary-xyz", DEFAULT_RATE);
        speaker.speak("hello", DEFAULT_LOCALE);
        assert!(speaker.current.lock().unwrap().is_none());
    }

    #[test]
    fn test_build_speaker_prefers_configured_command() {
        let speaker = build_speaker(Some(" my-tts "), DEFAULT_RATE);
        assert_eq!(speaker.name(), "my-tts");
    }

    #[test]
    fn test_noop_speaker() {
        let speaker = NoopSpeaker;
        speaker.speak("anything", DEFAULT_LOCALE);
        assert_eq!(speaker.name(), "none");
    }
}
