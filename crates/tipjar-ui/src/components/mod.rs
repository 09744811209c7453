//! Reusable UI components.

mod button;
mod input;
mod pills;
mod score_meter;
mod sheet;
mod switch;
mod toast_banner;

pub use button::*;
pub use input::*;
pub use pills::*;
pub use score_meter::*;
pub use sheet::*;
pub use switch::*;
pub use toast_banner::*;
