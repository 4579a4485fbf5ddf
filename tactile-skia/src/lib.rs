pub mod config;
pub mod frame;
pub mod loader;
pub mod surface;

pub use frame::{Frame, FrameError};
pub use loader::SkiaLoader;
pub use surface::{SkiaPayload, SkiaSurface};
