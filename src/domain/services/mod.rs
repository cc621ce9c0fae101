//! Runtime collaborators the use cases consume.
//!
//! Each port is a small synchronous trait so tests can swap in deterministic
//! doubles. Production implementations live in
//! [`crate::infrastructure::system`].

mod access_code_generator;
mod clock;
mod id_generator;

pub use access_code_generator::AccessCodeGenerator;
pub use clock::Clock;
pub use id_generator::IdGenerator;
