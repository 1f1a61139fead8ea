use eframe::egui;
use std::path::PathBuf;

/// Loads the assistant avatar from `assets/vic-avatar.png` if it exists
pub fn load(ctx: &egui::Context) -> Option<egui::TextureHandle> {
    let possible_paths = [
        PathBuf::from("assets/vic-avatar.png"),
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/vic-avatar.png"),
    ];

    let Some(image_path) = possible_paths.into_iter().find(|path| path.exists()) else {
        log::info!("No avatar image found, using painted initial");
        return None;
    };

    let image_data = match std::fs::read(&image_path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Cannot read {}: {}", image_path.display(), e);
            return None;
        }
    };

    match image::load_from_memory(&image_data) {
        Ok(img) => {
            let size = [img.width() as usize, img.height() as usize];
            let pixels = img.to_rgba8().into_raw();
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
            log::info!("✓ Avatar loaded from {}", image_path.display());
            Some(ctx.load_texture("vic_avatar", color_image, egui::TextureOptions::LINEAR))
        }
        Err(e) => {
            log::warn!("Cannot decode {}: {}", image_path.display(), e);
            None
        }
    }
}

/// Draws the avatar at `size` points, or a painted "V" when there is no image
pub fn draw(ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>, size: f32) -> egui::Rect {
    match texture {
        Some(texture) => {
            let sized = egui::load::SizedTexture::new(texture.id(), egui::vec2(size, size));
            ui.add(egui::Image::from_texture(sized)).rect
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
            let painter = ui.painter();
            painter.circle_filled(rect.center(), size / 2.0, egui::Color32::from_rgb(40, 110, 220));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "V",
                egui::FontId::proportional(size * 0.5),
                egui::Color32::WHITE,
            );
            rect
        }
    }
}
