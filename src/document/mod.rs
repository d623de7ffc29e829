mod assembler;
mod serializer;

pub use assembler::assemble;
pub use serializer::{prettify, serialize, SerializeOptions};
