//! Trip Ledger engine for owner-operator trucking
//!
//! This crate evaluates whether a load is worth taking: it estimates the hours
//! a trip keeps the driver away from home, resolves fuel economy from lifetime
//! fuel records, and derives net income and net income per hour away from the
//! operator's saved cost settings.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
