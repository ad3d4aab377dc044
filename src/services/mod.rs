pub mod providers;
pub mod sanitize;

pub use sanitize::strip_code_fences;
