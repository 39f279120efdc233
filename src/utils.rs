pub mod macros;
pub mod sync;
