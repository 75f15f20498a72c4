// Parameter engine tests entry point

pub mod params {
    pub mod category_test;
    pub mod encode_test;
    pub mod property_test;
}

// Import common test utilities
mod common;
