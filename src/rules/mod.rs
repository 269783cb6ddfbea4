pub mod attacks;
pub mod checkmate;
pub mod movegen;
