#[cfg(feature = "vectors")]
pub mod vector;
