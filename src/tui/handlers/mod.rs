//! Input handler modules for the different TUI contexts.

pub mod editing;
pub mod gallery;
pub mod main;

pub use editing::handle_edit_input;
pub use gallery::handle_gallery_input;
pub use main::handle_main_input;
