//! # fibprint-cli
//!
//! Text and JSON presenters, styled diagnostics, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use output::OutputFormat;
pub use presenter::{presenter_for, JsonPresenter, ResultPresenter, TextPresenter};
