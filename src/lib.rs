//! Écritoire - Personal Writing Style Engine
//!
//! This crate learns how a person writes from their own samples, conditions
//! a local language model on that style, refines the output toward it, and
//! learns from the user's edits to what was generated.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
