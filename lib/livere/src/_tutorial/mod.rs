//! # Tutorial: Calling LiveRe services
//!
//! Learn to call LiveRe services and to describe your own, step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Count comments on a page
//! 2. [Describing a Service][chapter_1] - Method tables, arguments and bodies
//! 3. [Errors and Logging][chapter_2] - Failure kinds, log events, middleware
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
