pub mod aluno;
pub mod greeting;
