pub mod counter;
pub mod unit;

pub use counter::{BITS_PER_BYTE, ByteCount};
pub use unit::Unit;
