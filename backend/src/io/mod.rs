//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services. Translates
//! requests into service calls and domain results into JSON responses with
//! the matching status codes.

pub mod rest;
