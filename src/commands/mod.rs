//! Command implementations

mod check;
mod generate;
mod print;

pub use check::check;
pub use generate::generate;
pub use print::print;
