use sdl2::rect::Rect;

use super::{
    audio_system::MusicPlayer,
    input_system::{Action, Direction},
    system::DemoSettings,
};

/// one cell of the 2x2 spritesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clip {
    #[default]
    First,
    Second,
    Third,
    Fourth,
}

impl Clip {
    pub const ALL: [Clip; 4] = [Clip::First, Clip::Second, Clip::Third, Clip::Fourth];

    pub fn index(self) -> usize {
        self as usize
    }

    /// cells are numbered down each column first: column i/2, row i%2
    pub fn rect(self, cell_size: u32) -> Rect {
        let i = self.index() as i32;
        let size = cell_size as i32;
        Rect::new(i / 2 * size, i % 2 * size, cell_size, cell_size)
    }
}

/// top left corner that centers a `size` box on a `screen`
pub fn centered(screen: (u32, u32), size: (u32, u32)) -> (i32, i32) {
    (
        screen.0 as i32 / 2 - size.0 as i32 / 2,
        screen.1 as i32 / 2 - size.1 as i32 / 2,
    )
}

/// fixed geometry of the scene, derived once from the settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLayout {
    pub screen: (u32, u32),
    pub cell_size: u32,
    pub step: i32,
    /// largest x that keeps the sprite's right edge on screen
    pub max_x: i32,
    /// largest y that keeps the sprite's bottom edge on screen
    pub max_y: i32,
}

impl SceneLayout {
    pub fn new(settings: &DemoSettings) -> Self {
        let cell = settings.clip_size as i32;
        Self {
            screen: (settings.screen_width, settings.screen_height),
            cell_size: settings.clip_size,
            step: settings.step,
            max_x: (settings.screen_width as i32 - cell).max(0),
            max_y: (settings.screen_height as i32 - cell).max(0),
        }
    }
}

/// everything the update step mutates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneState {
    pub x: i32,
    pub y: i32,
    pub clip: Clip,
    pub quit: bool,
}

impl SceneState {
    /// sprite centered on screen showing the first cell
    pub fn new(layout: &SceneLayout) -> Self {
        let (x, y) = centered(layout.screen, (layout.cell_size, layout.cell_size));
        Self {
            x,
            y,
            clip: Clip::default(),
            quit: false,
        }
    }

    pub fn sprite_clip(&self, layout: &SceneLayout) -> Rect {
        self.clip.rect(layout.cell_size)
    }

    pub fn apply<P: MusicPlayer + ?Sized>(
        &mut self,
        action: Action,
        layout: &SceneLayout,
        music: &mut P,
    ) {
        match action {
            Action::SelectClip(clip) => {
                log::debug!("clip {}", clip.index());
                self.clip = clip;
            }
            Action::Move(direction) => self.step(direction, layout),
            Action::ToggleMusic => match music.toggle() {
                Ok(state) => log::debug!("music {state:?}"),
                Err(e) => log::warn!("Mix_PlayMusic Error: {e}"),
            },
            Action::Quit => self.quit = true,
        }
    }

    fn step(&mut self, direction: Direction, layout: &SceneLayout) {
        let step = layout.step;
        match direction {
            Direction::Up => self.y = (self.y - step).clamp(0, layout.max_y),
            Direction::Down => self.y = (self.y + step).clamp(0, layout.max_y),
            Direction::Left => self.x = (self.x - step).clamp(0, layout.max_x),
            Direction::Right => self.x = (self.x + step).clamp(0, layout.max_x),
        }
    }
}
