pub mod header_name;

pub use header_name::HeaderName;
