use std::path::Path;

use eframe::egui;
use network_field::{Animator, AppError, EguiCanvas, FieldConfig, Theme, ThemeSwitch, surface_pointer};

const THEME_KEY: &str = "theme";
const TOGGLE_MARGIN: f32 = 16.0;

fn visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    }
}

fn saved_theme(storage: Option<&dyn eframe::Storage>) -> Theme {
    let Some(flag) = storage.and_then(|storage| storage.get_string(THEME_KEY)) else {
        return Theme::default();
    };
    Theme::from_flag(&flag).unwrap_or_else(|| {
        log::warn!("ignoring unknown theme preference {flag:?}");
        Theme::default()
    })
}

struct NetworkBackground {
    animator: Animator,
    theme: ThemeSwitch,
}

impl NetworkBackground {
    fn new(cc: &eframe::CreationContext, config: FieldConfig) -> Self {
        let initial = saved_theme(cc.storage);
        cc.egui_ctx.set_visuals(visuals(initial));

        let mut theme = ThemeSwitch::new(initial);
        let ctx = cc.egui_ctx.clone();
        theme.subscribe(move |theme| ctx.set_visuals(visuals(theme)));

        Self {
            animator: Animator::new(config),
            theme,
        }
    }

    fn theme_toggle(&mut self, ui: &mut egui::Ui) {
        let icon = match self.theme.current() {
            Theme::Light => "🌙",
            Theme::Dark => "☀",
        };
        if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
            self.theme.toggle();
        }
    }
}

impl eframe::App for NetworkBackground {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = self.theme.current();

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

                let pointer = surface_pointer(ctx.input(|i| i.pointer.hover_pos()), rect);
                self.animator.set_pointer(pointer);

                let mut canvas = ui
                    .is_rect_visible(rect)
                    .then(|| EguiCanvas::new(ui.painter_at(rect), rect, theme.palette().background));
                self.animator.frame(canvas.as_mut(), theme);
            });

        egui::Area::new("theme_toggle")
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-TOGGLE_MARGIN, TOGGLE_MARGIN))
            .show(ctx, |ui| self.theme_toggle(ui));

        // Request continuous updates
        ctx.request_repaint();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_KEY, self.theme.current().as_flag().to_owned());
    }
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => {
            log::info!("loading field config from {}", Path::new(&path).display());
            FieldConfig::load(&path)?
        }
        None => FieldConfig::default(),
    };

    eframe::run_native(
        "Network Field",
        eframe::NativeOptions {
            renderer: eframe::Renderer::Wgpu,
            initial_window_size: Some(egui::vec2(1280.0, 800.0)),
            ..Default::default()
        },
        Box::new(|cc| Box::new(NetworkBackground::new(cc, config))),
    )?;

    Ok(())
}
