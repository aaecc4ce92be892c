use std::path::Path;

use sdl2::mixer::Music;

use super::error::{AssetError, Context};

/// loop count the mixer reads as "forever"
const LOOP_FOREVER: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicState {
    Stopped,
    Playing,
    Paused,
}

/// the mixer's one music channel
pub trait MusicPlayer {
    /// true while a track is on the channel, including when it is paused
    fn is_playing(&self) -> bool;
    fn is_paused(&self) -> bool;
    /// start the track from the beginning, looping forever
    fn play(&mut self) -> Result<(), String>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn halt(&mut self);

    fn state(&self) -> MusicState {
        if !self.is_playing() {
            MusicState::Stopped
        } else if self.is_paused() {
            MusicState::Paused
        } else {
            MusicState::Playing
        }
    }

    /// start if stopped, resume if paused, pause otherwise. a paused track is
    /// resumed where it left off, never restarted
    fn toggle(&mut self) -> Result<MusicState, String> {
        match self.state() {
            MusicState::Stopped => self.play()?,
            MusicState::Paused => self.resume(),
            MusicState::Playing => self.pause(),
        }
        Ok(self.state())
    }
}

/// a loaded track driving the mixer's music channel
pub struct Track {
    music: Music<'static>,
}

impl Track {
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let music = Music::from_file(path).context("Mix_LoadMUS")?;
        Ok(Self { music })
    }
}

impl MusicPlayer for Track {
    fn is_playing(&self) -> bool {
        Music::is_playing()
    }

    fn is_paused(&self) -> bool {
        Music::is_paused()
    }

    fn play(&mut self) -> Result<(), String> {
        self.music.play(LOOP_FOREVER)
    }

    fn pause(&mut self) {
        Music::pause();
    }

    fn resume(&mut self) {
        Music::resume();
    }

    fn halt(&mut self) {
        Music::halt();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// behaves like the mixer's music channel without an audio device
    #[derive(Debug, Default)]
    pub(crate) struct FakeChannel {
        pub loaded: bool,
        pub paused: bool,
        pub starts: u32,
    }

    impl MusicPlayer for FakeChannel {
        fn is_playing(&self) -> bool {
            self.loaded
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn play(&mut self) -> Result<(), String> {
            self.loaded = true;
            self.paused = false;
            self.starts += 1;
            Ok(())
        }

        fn pause(&mut self) {
            if self.loaded {
                self.paused = true;
            }
        }

        fn resume(&mut self) {
            self.paused = false;
        }

        fn halt(&mut self) {
            self.loaded = false;
            self.paused = false;
        }
    }

    #[test]
    fn toggle_cycles_stopped_playing_paused_playing() {
        let mut channel = FakeChannel::default();
        assert_eq!(channel.state(), MusicState::Stopped);

        assert_eq!(channel.toggle(), Ok(MusicState::Playing));
        assert_eq!(channel.toggle(), Ok(MusicState::Paused));
        assert_eq!(channel.toggle(), Ok(MusicState::Playing));

        // resumed, not restarted
        assert_eq!(channel.starts, 1);
    }

    #[test]
    fn toggle_after_halt_starts_again() {
        let mut channel = FakeChannel::default();
        channel.play().unwrap();
        channel.halt();
        assert_eq!(channel.toggle(), Ok(MusicState::Playing));
        assert_eq!(channel.starts, 2);
    }

    #[test]
    fn failed_start_is_reported() {
        struct Broken;
        impl MusicPlayer for Broken {
            fn is_playing(&self) -> bool {
                false
            }
            fn is_paused(&self) -> bool {
                false
            }
            fn play(&mut self) -> Result<(), String> {
                Err("no audio device".into())
            }
            fn pause(&mut self) {}
            fn resume(&mut self) {}
            fn halt(&mut self) {}
        }

        assert_eq!(Broken.toggle(), Err("no audio device".to_string()));
    }
}
