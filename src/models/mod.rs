pub mod filters;
pub mod page;

pub use filters::*;
pub use page::*;
