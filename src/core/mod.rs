// Core logic exports
pub mod feed;
pub mod reciprocity;

pub use feed::{filter_candidates, ExclusionSet};
pub use reciprocity::{is_mutual_like, normalize_pair};
