//! # syllabus-core
//!
//! Core types, ID prefixes, and error types for Syllabus.
//!
//! This crate provides the foundational types shared across all Syllabus crates:
//! - Entity structs for the course tree (course, lesson, content, question, option)
//! - Enums for difficulty, lesson type, and question type
//! - ID prefix constants
//! - Write payloads submitted by authors, with shape validation
//! - Read models (course aggregate, lesson detail) returned to callers
//! - Caller identity
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod payloads;
pub mod responses;
