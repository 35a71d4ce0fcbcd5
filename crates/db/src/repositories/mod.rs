//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every read or mutation of
//! a user-owned resource takes the owner's id and intersects the query
//! with it, so records belonging to other users are indistinguishable
//! from records that do not exist.

pub mod calculation_repo;
pub mod handwritten_repo;
pub mod note_repo;
pub mod profile_repo;
pub mod session_repo;
pub mod speech_repo;
pub mod user_repo;

pub use calculation_repo::CalculationRepo;
pub use handwritten_repo::HandwrittenRepo;
pub use note_repo::NoteRepo;
pub use profile_repo::ProfileRepo;
pub use session_repo::SessionRepo;
pub use speech_repo::SpeechRepo;
pub use user_repo::UserRepo;
