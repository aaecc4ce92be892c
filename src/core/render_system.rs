use std::path::Path;

use sdl2::{
    image::LoadTexture,
    pixels::Color,
    rect::Rect,
    render::{Canvas, Texture, TextureCreator},
    ttf::Font,
    video::{Window, WindowContext},
};

use super::error::{AssetError, Context, StartupError};

/// textures must only be used with their originating canvas + creator. this
/// provides a tight coupling between those components
pub struct CanvasAndCreator {
    pub canvas: Canvas<Window>,
    pub creator: TextureCreator<WindowContext>,
}

impl CanvasAndCreator {
    /// hardware accelerated, presentation synced to vblank
    pub fn new(window: Window) -> Result<Self, StartupError> {
        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .context("SDL_CreateRenderer")?;
        let creator = canvas.texture_creator();
        Ok(Self { canvas, creator })
    }
}

/// decode an image file into a texture bound to the creator's renderer
pub fn load_texture<'a>(
    creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>, AssetError> {
    creator.load_texture(path).context("LoadTexture")
}

/// rasterize `message` with blended glyphs and upload it as a texture
pub fn render_text<'a>(
    creator: &'a TextureCreator<WindowContext>,
    message: &str,
    font: &Font,
    color: Color,
) -> Result<Texture<'a>, AssetError> {
    let surface = font
        .render(message)
        .blended(color)
        .context("TTF_RenderText")?;
    // surface is freed at the end of this scope either way
    creator
        .create_texture_from_surface(&surface)
        .context("SDL_CreateTexture")
}

/// destination for drawing at (x, y) without scaling: the clip's size if
/// there is one, otherwise the texture's native size
pub fn destination_rect(x: i32, y: i32, clip: Option<Rect>, native: (u32, u32)) -> Rect {
    match clip {
        Some(clip) => Rect::new(x, y, clip.width(), clip.height()),
        None => Rect::new(x, y, native.0, native.1),
    }
}

/// copy the clip (or the whole texture) into `dst`, scaling as needed
pub fn copy_to(
    canvas: &mut Canvas<Window>,
    texture: &Texture,
    dst: Rect,
    clip: Option<Rect>,
) -> Result<(), String> {
    canvas.copy(texture, clip, dst)
}

/// copy the clip (or the whole texture) with its top left at (x, y),
/// preserving source dimensions
pub fn copy_at(
    canvas: &mut Canvas<Window>,
    texture: &Texture,
    x: i32,
    y: i32,
    clip: Option<Rect>,
) -> Result<(), String> {
    let query = texture.query();
    let dst = destination_rect(x, y, clip, (query.width, query.height));
    copy_to(canvas, texture, dst, clip)
}
