//! Reusable UI components
//!
//! Standalone widgets shared by the plan and search views.

use crate::theme;
use eframe::egui;

/// Section label above a form control
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}

/// Pill-style toggle. Selected chips get the teal glow + fill used by the
/// segmented toggles. Returns the click response.
pub fn chip(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        egui::FontId::proportional(theme::FONT_LABEL),
        theme::TEXT_PRIMARY,
    );
    let width = galley.size().x + theme::SPACING_XL * 2.0;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, theme::CHIP_HEIGHT), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let base = if selected {
            theme::TOGGLE_SELECTED
        } else {
            theme::TOGGLE_UNSELECTED
        };
        let (fill, draw_rect) = theme::button_visual(&response, base, rect);
        let painter = ui.painter();
        if selected {
            painter.rect_filled(draw_rect, theme::RADIUS_MEDIUM, theme::TOGGLE_GLOW);
            painter.rect_filled(draw_rect.shrink(1.0), theme::RADIUS_MEDIUM - 1.0, fill);
        } else {
            painter.rect_filled(draw_rect, theme::RADIUS_MEDIUM, fill);
        }
        let text_color = if selected {
            theme::TEXT_PRIMARY
        } else {
            theme::TEXT_MUTED
        };
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(theme::FONT_LABEL),
            text_color,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Flag image next to the country name, shown under a country selector
pub fn flag_badge(ui: &mut egui::Ui, flag: Option<&egui::TextureHandle>, name: &str) {
    theme::section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            match flag {
                Some(texture) => {
                    let size = texture.size_vec2();
                    let height = theme::FLAG_WIDTH * size.y / size.x.max(1.0);
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(theme::FLAG_WIDTH, height),
                    ));
                }
                None => {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(egui_phosphor::regular::FLAG)
                                .size(theme::FONT_TITLE)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                }
            }
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new(name)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::ACCENT),
            );
        });
    });
}

/// Single line of status text
pub fn status_text(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(egui::RichText::new(text).size(theme::FONT_BODY).color(color));
}
