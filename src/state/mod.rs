//! Application state module

mod app_state;
mod content;
mod forms;
mod splash_state;

pub use app_state::*;
pub use content::*;
pub use forms::*;
pub use splash_state::*;
