pub mod button;
pub mod slider;
pub mod toggle;

pub use button::PushButton;
pub use slider::Slider;
pub use toggle::ToggleButton;
