//! Stateless aggregation services. Every function takes its inputs explicitly
//! and returns a fresh value; nothing here holds state between calls.

pub mod services;
