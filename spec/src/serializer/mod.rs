//! Serializers for the root tables.
//!
//! - **JSON** ([`json`]): the persisted form of the input tables: a
//!   key→string map for the identity table and an ordered list for the
//!   wheel sequence.

pub mod json;
