pub mod aluno;
pub mod audit;
