//! Data contracts shared between the console frontend and the REST backend.

pub mod domain;
