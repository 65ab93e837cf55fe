//! Attest Core Types and Definitions
//!
//! This crate provides the foundational drawing types for the Attest report
//! generator. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Visual definitions for diagram elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
