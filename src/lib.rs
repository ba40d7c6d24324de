pub mod config;
pub mod console_interface;
pub mod core;
pub mod json_export;
pub mod models;

#[cfg(test)]
mod test;
