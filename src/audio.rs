//! Sound effects for lock and line-clear signals.
//!
//! Tones are synthesized, so there are no asset files to ship. Without the
//! `audio` feature, or when no output device can be opened, the speaker is
//! silent and the game runs exactly the same.

use crate::game::GameEvents;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Effect {
    PieceLocked,
    LineCleared,
}

impl Effect {
    /// (frequency in Hz, length in milliseconds)
    pub fn tone(self) -> (f32, u64) {
        match self {
            Effect::PieceLocked => (220.0, 60),
            Effect::LineCleared => (880.0, 140),
        }
    }
}

pub struct Speaker {
    output: Option<backend::Output>,
}

impl Speaker {
    /// Opens the default output device unless `muted`. Never fails: a
    /// missing device is logged and leaves the speaker silent.
    pub fn open(muted: bool) -> Self {
        if muted {
            return Self::silent();
        }

        match backend::Output::open() {
            Ok(output) => Self { output: Some(output) },
            Err(err) => {
                log::warn!("no audio output, continuing without sound: {err}");
                Self::silent()
            }
        }
    }

    pub fn silent() -> Self {
        Self { output: None }
    }

    pub fn is_silent(&self) -> bool {
        self.output.is_none()
    }

    pub fn play(&self, effect: Effect) {
        if let Some(output) = &self.output {
            if let Err(err) = output.play(effect) {
                log::warn!("failed to play {effect:?}: {err}");
            }
        }
    }
}

impl GameEvents for Speaker {
    fn piece_locked(&mut self) {
        self.play(Effect::PieceLocked);
    }

    fn line_cleared(&mut self) {
        self.play(Effect::LineCleared);
    }
}

#[cfg(feature = "audio")]
mod backend {
    use std::time::Duration;

    use rodio::source::{SineWave, Source};
    use rodio::{OutputStream, OutputStreamHandle};

    use super::Effect;

    pub struct Output {
        // dropping the stream stops playback
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl Output {
        pub fn open() -> anyhow::Result<Self> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self { _stream: stream, handle })
        }

        pub fn play(&self, effect: Effect) -> anyhow::Result<()> {
            let (freq, millis) = effect.tone();
            let source = SineWave::new(freq)
                .take_duration(Duration::from_millis(millis))
                .amplify(0.2);
            self.handle.play_raw(source)?;
            Ok(())
        }
    }
}

#[cfg(not(feature = "audio"))]
mod backend {
    use super::Effect;

    pub struct Output;

    impl Output {
        pub fn open() -> anyhow::Result<Self> {
            anyhow::bail!("built without the `audio` feature")
        }

        pub fn play(&self, _effect: Effect) -> anyhow::Result<()> {
            Ok(())
        }
    }
}
