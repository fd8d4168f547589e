//! Modal detail view for the selected movie.
//!
//! The panel sits in its own layer above the backdrop, so a click inside the
//! panel never reaches the backdrop's dismiss handler. Escape is only read while
//! the overlay is shown.

use eframe::egui;
use shared::domain::Movie;

use crate::controller::reducer::DismissReason;
use crate::ui::grid::paint_poster;

const OVERLAY_ID: &str = "movie_detail_overlay";
const PANEL_WIDTH: f32 = 720.0;
const POSTER_SIZE: egui::Vec2 = egui::vec2(240.0, 360.0);

pub const RELEASE_DATE_LABEL: &str = "개봉일:";
pub const RATING_LABEL: &str = "평점:";
pub const OVERVIEW_LABEL: &str = "줄거리:";
pub const CLOSE_LABEL: &str = "x";

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    pub title: &'a str,
    pub release_date: &'a str,
    pub rating_label: String,
    pub overview: &'a str,
}

impl<'a> DetailView<'a> {
    pub fn new(movie: &'a Movie) -> Self {
        Self {
            title: &movie.title,
            release_date: &movie.release_date,
            rating_label: movie.detail_rating_label(),
            overview: &movie.overview,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRects {
    pub panel: egui::Rect,
    pub close_button: egui::Rect,
}

pub struct OverlayOutcome {
    pub dismissed: Option<DismissReason>,
    pub rects: OverlayRects,
}

pub fn show(
    ctx: &egui::Context,
    view: &DetailView<'_>,
    poster: Option<&egui::TextureHandle>,
) -> OverlayOutcome {
    let escape_pressed =
        ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape));

    let modal = egui::Modal::new(egui::Id::new(OVERLAY_ID)).show(ctx, |ui| {
        ui.set_width(PANEL_WIDTH);
        ui.style_mut().interaction.selectable_labels = false;

        let close_button = ui
            .horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.button(CLOSE_LABEL)
                })
                .inner
            })
            .inner;

        ui.horizontal_top(|ui| {
            let (poster_rect, _) = ui.allocate_exact_size(POSTER_SIZE, egui::Sense::hover());
            paint_poster(ui, poster_rect, poster);

            ui.vertical(|ui| {
                ui.heading(view.title);
                labelled(ui, RELEASE_DATE_LABEL, view.release_date);
                labelled(ui, RATING_LABEL, &view.rating_label);
                ui.add(
                    egui::Label::new(format!("{OVERVIEW_LABEL} {}", view.overview)).wrap(),
                );
            });
        });

        close_button
    });

    let dismissed = if modal.inner.clicked() {
        Some(DismissReason::CloseButton)
    } else if escape_pressed {
        Some(DismissReason::Escape)
    } else if modal.backdrop_response.clicked() {
        Some(DismissReason::Backdrop)
    } else {
        None
    };

    OverlayOutcome {
        dismissed,
        rects: OverlayRects {
            panel: modal.response.rect,
            close_button: modal.inner.rect,
        },
    }
}

fn labelled(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.label(value);
    });
}
