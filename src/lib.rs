pub mod config;
pub mod driver;
pub mod error;
pub mod field;
pub mod particle;
pub mod surface;
pub mod theme;

pub use config::FieldConfig;
pub use driver::Animator;
pub use error::{AppError, ConfigError};
pub use field::{Field, Link};
pub use particle::Particle;
pub use surface::{Color, EguiCanvas, Surface, surface_pointer};
pub use theme::{Palette, Theme, ThemeSwitch};
