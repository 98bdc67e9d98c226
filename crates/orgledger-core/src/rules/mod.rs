pub mod validation;

pub use validation::{has_cycle, is_descendant, validate_tree};
