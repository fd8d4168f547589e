//! Bridge between the UI thread and the tokio worker that talks to the catalog.

pub mod commands;
pub mod runtime;
