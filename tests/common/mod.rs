pub mod app;
pub mod mock;

pub use app::*;
pub use mock::*;
