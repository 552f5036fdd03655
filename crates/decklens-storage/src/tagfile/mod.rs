//! The tag-file subsystem: one shared line grammar, an add-only merge,
//! and a full-read/atomic-rewrite store.

pub mod line;
pub mod merge;
pub mod store;

pub use line::{format_tag_line, parse_tag_line, TagLine};
pub use merge::{merge_tag_file, MergeOutcome};
pub use store::{read_tag_file, write_tag_file};
