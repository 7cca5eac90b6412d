//! Query modules for the Pokemon TCG SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes methods returning
//! either a fallback value or `Result<T>` with the failure.

pub mod cards;
pub mod enums;
pub mod sets;

pub use cards::CardQuery;
pub use enums::EnumQuery;
pub use sets::SetQuery;
