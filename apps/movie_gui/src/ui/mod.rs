//! UI layer: app shell, movie grid, detail overlay, and theme.

pub mod app;
pub mod detail_overlay;
pub mod grid;
pub mod theme;

pub use app::MovieListApp;
