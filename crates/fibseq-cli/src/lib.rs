//! # fibseq-cli
//!
//! Terminal front end for the coordinator: event presenters, the
//! confirmation prompt, the polling driver, and shell completion.

pub mod completion;
pub mod driver;
pub mod output;
pub mod presenter;
pub mod prompt;
pub mod ui;

pub use driver::drive;
pub use presenter::{CliPresenter, JsonPresenter};
pub use prompt::ConsolePrompt;
