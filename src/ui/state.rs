use std::path::PathBuf;

use crate::engine::{Codec, EncodeParams, JobRunner, SpeedPreset};

/// Which form field currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Codec,
    Quality,
    Preset,
    Start,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Codec,
            Focus::Codec => Focus::Quality,
            Focus::Quality => Focus::Preset,
            Focus::Preset => Focus::Start,
            Focus::Start => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::Start,
            Focus::Codec => Focus::Input,
            Focus::Quality => Focus::Codec,
            Focus::Preset => Focus::Quality,
            Focus::Start => Focus::Preset,
        }
    }
}

/// User-visible state of the current/last run
#[derive(Debug, Clone)]
pub enum Status {
    Idle,
    Running,
    Succeeded { output_path: PathBuf },
    Failed { diagnostic: String },
    ToolMissing,
}

pub struct AppState {
    /// Path field text; validated into `EncodeParams::input_path` on start
    pub input: String,
    pub codec: Codec,
    pub quality: u32,
    pub preset: SpeedPreset,

    pub focus: Focus,
    pub status: Status,
    /// One-line validation/guard message shown under the form
    pub notice: Option<String>,

    pub runner: JobRunner,
}

impl AppState {
    pub fn new(initial_input: Option<PathBuf>) -> Self {
        let defaults = EncodeParams::default();

        Self {
            input: initial_input
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
            codec: defaults.codec,
            quality: defaults.quality,
            preset: defaults.preset,
            focus: Focus::Input,
            status: Status::Idle,
            notice: None,
            runner: JobRunner::new(),
        }
    }

    /// Current form selections as engine parameters
    pub fn params(&self) -> EncodeParams {
        let input_path = if self.input.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(self.input.trim()))
        };

        EncodeParams {
            input_path,
            codec: self.codec,
            quality: self.quality,
            preset: self.preset,
        }
    }

    pub fn cycle_codec(&mut self, forward: bool) {
        self.codec = cycle(&Codec::ALL, self.codec, forward);
    }

    pub fn cycle_preset(&mut self, forward: bool) {
        self.preset = cycle(&SpeedPreset::ALL, self.preset, forward);
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let len = all.len();
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    all[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut focus = Focus::Input;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Input);

        assert_eq!(Focus::Input.prev(), Focus::Start);
    }

    #[test]
    fn codec_cycle_wraps() {
        let mut state = AppState::new(None);
        assert_eq!(state.codec, Codec::H264);
        state.cycle_codec(true);
        assert_eq!(state.codec, Codec::H265);
        state.cycle_codec(true);
        assert_eq!(state.codec, Codec::H264);
        state.cycle_codec(false);
        assert_eq!(state.codec, Codec::H265);
    }

    #[test]
    fn params_treats_blank_input_as_missing() {
        let mut state = AppState::new(None);
        assert!(state.params().input_path.is_none());

        state.input = "   ".to_string();
        assert!(state.params().input_path.is_none());

        state.input = "movie.mp4".to_string();
        assert_eq!(state.params().input_path, Some(PathBuf::from("movie.mp4")));
    }
}
