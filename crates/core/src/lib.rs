//! Domain model, repository ports and services for the question service.

pub mod domain;
pub mod repository;
pub mod service;
