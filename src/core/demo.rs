use sdl2::{
    render::{Canvas, Texture, TextureCreator},
    ttf::Font,
    video::{Window, WindowContext},
};

use super::{
    audio_system::{MusicPlayer, Track},
    error::{Context, StartupError},
    font_system::open_font,
    input_system::action_for_event,
    render_system::{copy_at, load_texture, render_text, CanvasAndCreator},
    res_path::resource_path,
    scene::{centered, SceneLayout, SceneState},
    system::{DemoSettings, System},
};

/// everything loaded from disk. fields drop in the reverse of load order
pub struct Assets<'ttf, 'tex> {
    pub track: Track,
    pub image: Texture<'tex>,
    pub text: Texture<'tex>,
    pub font: Font<'ttf, 'static>,
}

impl<'ttf, 'tex> Assets<'ttf, 'tex> {
    pub fn load(
        system: &'ttf System,
        creator: &'tex TextureCreator<WindowContext>,
        settings: &DemoSettings,
    ) -> Result<Self, StartupError> {
        let font = open_font(
            &system.ttf,
            &resource_path("font")?.join(settings.font_file),
            settings.point_size,
        )?;
        let text = render_text(creator, settings.message, &font, settings.text_color)?;
        let image = load_texture(creator, &resource_path("img")?.join(settings.image_file))?;
        let track = Track::load(&resource_path("audio")?.join(settings.music_file))?;

        log::info!("assets loaded");
        Ok(Self {
            track,
            image,
            text,
            font,
        })
    }
}

/// open the window, load the assets, then run the scene until quit. every
/// handle is released in reverse acquisition order on return, including
/// when startup fails part way
pub fn run(settings: &DemoSettings) -> Result<(), StartupError> {
    let system = System::new(settings)?;
    let window = system.window(settings)?;
    let mut cc = CanvasAndCreator::new(window)?;
    let mut event_pump = system.sdl.event_pump().context("SDL_GetEventPump")?;

    let mut assets = Assets::load(&system, &cc.creator, settings)?;

    let layout = SceneLayout::new(settings);
    let text_size = assets.text.query();
    let (text_x, text_y) = centered(layout.screen, (text_size.width, text_size.height));

    if let Err(e) = assets.track.play() {
        log::warn!("Mix_PlayMusic Error: {e}");
    }

    let mut state = SceneState::new(&layout);
    loop {
        for event in event_pump.poll_iter() {
            if let Some(action) = action_for_event(&event) {
                state.apply(action, &layout, &mut assets.track);
            }
        }
        if state.quit {
            break;
        }

        cc.canvas.clear();
        if let Err(e) = draw(&mut cc.canvas, &assets, &state, &layout, (text_x, text_y)) {
            log::warn!("SDL_RenderCopy Error: {e}");
        }
        cc.canvas.present();
    }

    shut_down(&mut assets.track);
    Ok(())
}

/// music stops before any handle is released
fn shut_down<P: MusicPlayer + ?Sized>(music: &mut P) {
    log::info!("shutting down");
    music.halt();
}

fn draw(
    canvas: &mut Canvas<Window>,
    assets: &Assets,
    state: &SceneState,
    layout: &SceneLayout,
    text_pos: (i32, i32),
) -> Result<(), String> {
    copy_at(
        canvas,
        &assets.image,
        state.x,
        state.y,
        Some(state.sprite_clip(layout)),
    )?;
    copy_at(canvas, &assets.text, text_pos.0, text_pos.1, None)
}
