pub mod envelope;
pub mod reorder;
