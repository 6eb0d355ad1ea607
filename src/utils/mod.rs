// Start of file: /src/utils/mod.rs

/*
    * Re-exports for utility modules: error mapping and response helpers.
*/

pub mod error_handler;
pub mod response_handler;

// End of file: /src/utils/mod.rs
