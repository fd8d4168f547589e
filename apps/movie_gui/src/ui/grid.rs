//! Clickable grid of movie cards, one per record in catalog order.

use eframe::egui;
use shared::domain::{Movie, MovieId};

pub const CARD_WIDTH: f32 = 180.0;
const POSTER_SIZE: egui::Vec2 = egui::vec2(CARD_WIDTH, 270.0);
const CARD_TEXT_HEIGHT: f32 = 52.0;
const CARD_PADDING: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub movie_id: MovieId,
    pub title: &'a str,
    pub rating_label: String,
}

pub fn card_views(movies: &[Movie]) -> Vec<CardView<'_>> {
    movies
        .iter()
        .map(|movie| CardView {
            movie_id: movie.id,
            title: &movie.title,
            rating_label: movie.grid_rating_label(),
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct GridResponse {
    /// Position of the card clicked this frame.
    pub clicked: Option<usize>,
    pub card_rects: Vec<egui::Rect>,
}

/// Draws the cards in order.
///
/// An empty slice draws nothing: no placeholder, no loading indicator.
pub fn show(
    ui: &mut egui::Ui,
    cards: &[CardView<'_>],
    poster_for: impl Fn(MovieId) -> Option<egui::TextureHandle>,
) -> GridResponse {
    let mut grid = GridResponse::default();
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
        for (index, card) in cards.iter().enumerate() {
            let response = show_card(ui, card, poster_for(card.movie_id));
            if response.clicked() {
                grid.clicked = Some(index);
            }
            grid.card_rects.push(response.rect);
        }
    });
    grid
}

fn show_card(
    ui: &mut egui::Ui,
    card: &CardView<'_>,
    poster: Option<egui::TextureHandle>,
) -> egui::Response {
    let size = egui::vec2(
        CARD_WIDTH + CARD_PADDING * 2.0,
        POSTER_SIZE.y + CARD_TEXT_HEIGHT + CARD_PADDING * 2.0,
    );
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    let fill = if response.hovered() {
        ui.visuals().widgets.hovered.weak_bg_fill
    } else {
        ui.visuals().faint_bg_color
    };
    ui.painter().rect_filled(rect, 8.0, fill);

    let poster_rect = egui::Rect::from_min_size(
        rect.min + egui::vec2(CARD_PADDING, CARD_PADDING),
        POSTER_SIZE,
    );
    paint_poster(ui, poster_rect, poster.as_ref());

    let text_rect = egui::Rect::from_min_max(
        egui::pos2(poster_rect.min.x, poster_rect.max.y + 4.0),
        rect.max - egui::vec2(CARD_PADDING, CARD_PADDING),
    );
    ui_in_rect(ui, text_rect, |ui| {
        ui.style_mut().interaction.selectable_labels = false;
        ui.add(egui::Label::new(egui::RichText::new(card.title).strong()).truncate());
        ui.label(&card.rating_label);
    });

    response
}

/// A poster that failed or has not arrived leaves its area blank.
pub fn paint_poster(ui: &egui::Ui, rect: egui::Rect, poster: Option<&egui::TextureHandle>) {
    ui.painter()
        .rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
    if let Some(texture) = poster {
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter()
            .image(texture.id(), rect, uv, egui::Color32::WHITE);
    }
}

fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, vote_average: f64, poster_path: Option<&str>) -> Movie {
        Movie {
            id: MovieId(id),
            poster_path: poster_path.map(str::to_string),
            title: title.to_string(),
            vote_average,
            release_date: String::new(),
            overview: String::new(),
        }
    }

    #[test]
    fn one_card_per_movie_in_order() {
        let movies = vec![
            movie(1, "A", 7.0, Some("/a.jpg")),
            movie(2, "B", 8.456, Some("/b.jpg")),
            movie(3, "C", 5.04, None),
        ];
        let cards = card_views(&movies);

        let titles: Vec<&str> = cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        let ratings: Vec<&str> = cards.iter().map(|c| c.rating_label.as_str()).collect();
        assert_eq!(ratings, vec!["⭐ 7.0", "⭐ 8.5", "⭐ 5.0"]);
        let ids: Vec<MovieId> = cards.iter().map(|c| c.movie_id).collect();
        assert_eq!(ids, vec![MovieId(1), MovieId(2), MovieId(3)]);
    }

    #[test]
    fn empty_sequence_has_no_cards() {
        assert!(card_views(&[]).is_empty());
    }

    #[test]
    fn empty_grid_draws_and_reports_nothing() {
        let ctx = egui::Context::default();
        let mut grid = GridResponse {
            clicked: Some(0),
            card_rects: Vec::new(),
        };
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                grid = show(ui, &[], |_| None);
            });
        });
        assert_eq!(grid.clicked, None);
        assert!(grid.card_rects.is_empty());
    }

    #[test]
    fn lays_out_one_rect_per_card_left_to_right() {
        let movies = vec![movie(1, "A", 7.0, None), movie(2, "B", 8.0, None)];
        let ctx = egui::Context::default();
        let mut grid = GridResponse::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1280.0, 860.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                grid = show(ui, &card_views(&movies), |_| None);
            });
        });
        assert_eq!(grid.card_rects.len(), 2);
        assert!(grid.card_rects[0].right() < grid.card_rects[1].left());
        assert_eq!(grid.clicked, None);
    }
}
