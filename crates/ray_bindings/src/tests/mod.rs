//! Cross-module tests
//!
//! Contracts that every resource kind must satisfy, checked against the
//! recording backend.

mod lifecycle_contract;
