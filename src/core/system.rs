use std::path::Path;

use sdl2::{
    image::Sdl2ImageContext,
    mixer::{InitFlag, Sdl2MixerContext},
    pixels::Color,
    ttf::Sdl2TtfContext,
    video::Window,
    AudioSubsystem, Sdl, VideoSubsystem,
};

use super::error::{Context, StartupError};

/// every tunable of the demo. nothing here is read from disk or the
/// environment
#[derive(Debug, Clone)]
pub struct DemoSettings {
    pub title: &'static str,
    pub window_position: (i32, i32),
    pub screen_width: u32,
    pub screen_height: u32,

    pub frequency: i32,
    pub channels: i32,
    /// bytes per mixer chunk
    pub chunk_size: i32,

    pub font_file: &'static str,
    pub image_file: &'static str,
    pub music_file: &'static str,
    pub point_size: u16,
    pub message: &'static str,
    pub text_color: Color,

    /// side length of one spritesheet cell
    pub clip_size: u32,
    /// pixels moved per key press
    pub step: i32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            title: "tbejos Game",
            window_position: (100, 100),
            screen_width: 244 * 3,
            screen_height: 288 * 3,
            frequency: 44_100,
            channels: 2,
            chunk_size: 2_048,
            font_file: "Inconsolata-LGC.ttf",
            image_file: "image.png",
            music_file: "(c)song.ogg",
            point_size: 48,
            message: "TTF fonts are cool!",
            text_color: Color::RGBA(255, 255, 255, 255),
            clip_size: 100,
            step: 10,
        }
    }
}

/// decoder needed for the music file, picked by extension. mixer::init
/// rejects an empty set, so one decoder is always requested
pub fn mixer_flags(music_file: &str) -> InitFlag {
    let extension = Path::new(music_file)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("mp3") => InitFlag::MP3,
        Some("flac") => InitFlag::FLAC,
        Some("mid" | "midi") => InitFlag::MID,
        Some("mod" | "xm" | "it" | "s3m") => InitFlag::MOD,
        _ => InitFlag::OGG,
    }
}

/// closes the mixer's audio device on drop. Sdl2MixerContext only covers
/// Mix_Quit
pub struct MixerAudio {
    _private: (),
}

impl MixerAudio {
    fn open(settings: &DemoSettings) -> Result<Self, StartupError> {
        sdl2::mixer::open_audio(
            settings.frequency,
            sdl2::mixer::DEFAULT_FORMAT,
            settings.channels,
            settings.chunk_size,
        )
        .context("Mix_OpenAudio")?;
        Ok(Self { _private: () })
    }
}

impl Drop for MixerAudio {
    fn drop(&mut self) {
        sdl2::mixer::close_audio();
    }
}

/// core sdl2 subsystems needed by the demo
pub struct System {
    pub ttf: Sdl2TtfContext,
    pub image: Sdl2ImageContext,
    // device closed before Mix_Quit
    pub mixer_audio: MixerAudio,
    pub mixer: Sdl2MixerContext,
    // dropped in member order stated
    pub audio: AudioSubsystem,
    pub video: VideoSubsystem,
    // dropped last
    pub sdl: Sdl,
}

impl System {
    /// bring up video+audio, mixing, image decoding and font rendering in
    /// that order. on failure whatever was already initialized is shut down
    /// again in reverse
    pub fn new(settings: &DemoSettings) -> Result<Self, StartupError> {
        let sdl = sdl2::init().context("SDL_Init")?;
        let video = sdl.video().context("SDL_Init")?;
        let audio = sdl.audio().context("SDL_Init")?;

        let mixer = sdl2::mixer::init(mixer_flags(settings.music_file)).context("Mix_Init")?;
        let mixer_audio = MixerAudio::open(settings)?;

        let image = sdl2::image::init(sdl2::image::InitFlag::PNG).context("IMG_Init")?;
        let ttf = sdl2::ttf::init().context("TTF_Init")?;

        log::info!("sdl subsystems initialized");
        Ok(System {
            ttf,
            image,
            mixer_audio,
            mixer,
            audio,
            video,
            sdl,
        })
    }

    /// fixed size, fixed position, shown immediately
    pub fn window(&self, settings: &DemoSettings) -> Result<Window, StartupError> {
        let (x, y) = settings.window_position;
        self.video
            .window(settings.title, settings.screen_width, settings.screen_height)
            .position(x, y)
            .build()
            .context("SDL_CreateWindow")
    }
}
