//! Employee roster service.
//!
//! This crate stores employees together with their detail records, maps
//! them to and from a transport shape in which each detail is an encoded
//! token, and exports the roster as an `.xlsx` spreadsheet.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod mapping;
pub mod models;
pub mod service;
pub mod storage;
