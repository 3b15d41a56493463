pub mod export;
pub mod publish;
