pub mod extract;
pub mod fetch;
pub mod render;

pub use extract::*;
pub use fetch::*;
pub use render::*;
