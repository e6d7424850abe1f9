// src/types/mod.rs
pub mod job_description;
pub mod reference;

pub use job_description::*;
pub use reference::*;
