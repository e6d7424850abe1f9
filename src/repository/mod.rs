// src/repository/mod.rs
pub mod job_description_repository;
pub mod reference_repository;

pub use job_description_repository::JobDescriptionRepository;
pub use reference_repository::{Customer, ReferenceRepository, User};
