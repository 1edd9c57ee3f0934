//! Assistants, threads, messages, runs and the vector stores backing file search.
pub mod assistants;
pub use assistants::*;

pub mod messages;
pub mod runs;
pub mod steps;
pub mod stream;
pub mod threads;
pub mod vector_stores;
