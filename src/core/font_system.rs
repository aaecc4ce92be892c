use std::path::Path;

use sdl2::ttf::{Font, Sdl2TtfContext};

use super::error::{AssetError, Context};

/// open a font file at a fixed point size. the font borrows the ttf context,
/// so it is always closed before TTF_Quit
pub fn open_font<'ttf>(
    ttf: &'ttf Sdl2TtfContext,
    path: &Path,
    point_size: u16,
) -> Result<Font<'ttf, 'static>, AssetError> {
    ttf.load_font(path, point_size).context("TTF_OpenFont")
}
