pub mod fields;
pub mod wizard;
