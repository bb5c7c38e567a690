use cgmath::{Point2, Vector2};

use crate::{config::FieldConfig, field::Field, surface::Surface, theme::Theme};

/// Drives a [`Field`] from the host's frame callback.
///
/// The animator stays inert until it is handed a surface: no particles are
/// sampled and nothing ticks. From then on every frame resizes the field if
/// the surface changed size, advances it once and draws it.
pub struct Animator {
    field: Field,
    viewport: Option<Vector2<f32>>,
}

impl Animator {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            field: Field::new(config),
            viewport: None,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn is_running(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn set_pointer(&mut self, pointer: Option<Point2<f32>>) {
        self.field.set_pointer(pointer);
    }

    pub fn frame(&mut self, surface: Option<&mut impl Surface>, theme: Theme) {
        let Some(surface) = surface else {
            return;
        };

        let size = surface.size();
        if self.viewport != Some(size) {
            if self.viewport.is_none() {
                log::info!("network background attached at {}x{}", size.x, size.y);
            }
            self.field.resize(size.x, size.y);
            self.viewport = Some(size);
        }

        self.field.tick();
        self.field.render(surface, theme);
    }
}
