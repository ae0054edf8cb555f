//! State module for tracking crawl progress
//!
//! Every chapter in the requested range walks a short linear state machine
//! from `Pending` to one terminal outcome. Chapters never share state.

mod chapter_state;

pub use chapter_state::ChapterState;
