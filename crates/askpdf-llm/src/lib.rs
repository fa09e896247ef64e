//! HTTP text-generation client for askpdf
//!
//! This crate provides the `GenerationProvider` implementation that talks
//! to a text-generation-inference style `/generate` endpoint.

mod client;


pub use client::{TgiClient, extract_answer};

// Re-export core types for convenience
pub use askpdf_core::{Error, GenerationProvider, Result, SamplingParams};
