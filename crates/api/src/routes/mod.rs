//! Route handlers

pub mod alerts;
