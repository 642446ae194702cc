//! API route handlers

pub mod repositories;
