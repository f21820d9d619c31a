//! # numalgo-cli
//!
//! Text and JSON presentation of suite reports, the algorithm showcase and
//! shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod showcase;
pub mod ui;

pub use presenter::{CLIResultPresenter, JsonResultPresenter};
