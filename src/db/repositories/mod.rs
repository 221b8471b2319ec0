//! Repository implementations module.
//!
//! Only the in-memory `local` implementation ships: real persistence is
//! an external collaborator behind the repository traits.
pub mod local;

pub use local::LocalRepository;
