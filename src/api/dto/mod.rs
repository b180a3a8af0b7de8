//! Data Transfer Objects for the task API.
//!
//! Requests carry the field-level validation rules; responses perform the
//! rename from the internal record shape to the wire shape.

pub mod requests;
pub mod responses;
