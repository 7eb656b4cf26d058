//! Application state module

mod app_state;
mod draft;
mod files;
mod phone;
mod step;
mod validation;
mod wizard;

pub use app_state::*;
pub use draft::*;
pub use files::*;
pub use phone::*;
pub use step::*;
pub use validation::*;
pub use wizard::*;
