use std::{fs, path::Path, sync::Arc};

use anyhow::Context;
use eframe::egui;

const CUSTOM_FONT_NAME: &str = "movie_list_custom";

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(229, 160, 13);

pub fn apply(ctx: &egui::Context, font_path: Option<&Path>) {
    ctx.set_visuals(visuals());

    if let Some(path) = font_path {
        match load_font_definitions(path) {
            Ok(fonts) => {
                ctx.set_fonts(fonts);
                tracing::info!(font = %path.display(), "installed custom font");
            }
            Err(err) => tracing::warn!("keeping bundled fonts: {err:#}"),
        }
    }
}

fn visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.window_fill = egui::Color32::from_rgb(24, 24, 27);
    v.panel_fill = egui::Color32::from_rgb(18, 18, 20);
    v.extreme_bg_color = egui::Color32::from_rgb(38, 38, 42);
    v.faint_bg_color = egui::Color32::from_rgb(30, 30, 33);
    v.selection.bg_fill = ACCENT;
    v.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    v.window_corner_radius = egui::CornerRadius::same(10);
    v
}

/// Puts the font first in the proportional family so Hangul labels render.
fn load_font_definitions(path: &Path) -> anyhow::Result<egui::FontDefinitions> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read font '{}'", path.display()))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        CUSTOM_FONT_NAME.to_string(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, CUSTOM_FONT_NAME.to_string());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(CUSTOM_FONT_NAME.to_string());
    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_file_is_reported() {
        let err = load_font_definitions(Path::new("/definitely/not/here.ttf"))
            .expect_err("missing font");
        assert!(format!("{err:#}").contains("failed to read font"));
    }

    #[test]
    fn custom_font_is_preferred_for_proportional_text() {
        let path = std::env::temp_dir().join(format!(
            "movie_list_font_test_{}.ttf",
            std::process::id()
        ));
        fs::write(&path, b"not a real font, only bytes").expect("write font");

        let fonts = load_font_definitions(&path).expect("definitions");
        assert_eq!(
            fonts.families[&egui::FontFamily::Proportional].first(),
            Some(&CUSTOM_FONT_NAME.to_string())
        );
        assert!(fonts.font_data.contains_key(CUSTOM_FONT_NAME));

        fs::remove_file(path).expect("cleanup");
    }
}
