pub mod audio_system;
pub mod demo;
pub mod error;
pub mod font_system;
pub mod input_system;
pub mod render_system;
pub mod res_path;
pub mod scene;
pub mod system;
