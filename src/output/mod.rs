//! Console output

pub mod text;
