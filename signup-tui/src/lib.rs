//! Terminal front end for the sign-up form.

pub mod app;
pub mod buffer;
pub mod error;
pub mod paths;
pub mod terminal;
pub mod view;

pub use app::SignupApp;
pub use buffer::{Buffer, Cell, Rgb, TextStyle};
pub use error::TuiError;
pub use terminal::Terminal;
