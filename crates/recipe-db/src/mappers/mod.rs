//! Model to entity mappers
//!
//! `From<Model> for Entity` converts database rows into domain objects.
//! Rows carrying enum text columns use `TryFrom` so a value outside the
//! known set surfaces as a database error instead of a panic.

mod comment;
mod feed;
mod follow;
mod reaction;
mod recipe;
mod user;
