//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the entity is client-mutable, an update DTO with `Option` fields

pub mod calculation;
pub mod handwritten_text;
pub mod note;
pub mod profile;
pub mod session;
pub mod speech_transcript;
pub mod user;
