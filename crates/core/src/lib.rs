//! Domain building blocks shared by the database and API crates.
//!
//! Nothing here performs I/O: shared id/timestamp aliases, the domain error
//! type, and the field rules for the `Aluno` entity.

pub mod aluno;
pub mod error;
pub mod types;
