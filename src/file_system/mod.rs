pub mod entry_type;
pub mod read;
pub mod size;
