pub mod pointer;

pub use pointer::wire_cursor;
