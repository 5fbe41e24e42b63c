// Resume reviewer: Gemini-backed resume feedback plus a local keyword gap.
//
// This is the library root. The binary in main.rs is a thin CLI over it.

pub mod config;
pub mod document;
pub mod gemini;
pub mod keywords;
pub mod output;
pub mod review;
