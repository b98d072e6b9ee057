pub mod aluno_repo;

pub use aluno_repo::AlunoRepo;
