pub mod event;
pub mod time;

pub use event::*;
pub use time::*;
