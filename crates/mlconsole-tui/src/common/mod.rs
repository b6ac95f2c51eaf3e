pub mod input;

pub use input::{FieldBox, InputEdit, TextField};
