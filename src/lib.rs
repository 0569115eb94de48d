pub mod cards;
pub mod config;
pub mod fetch;
pub mod file_server;
pub mod listings;
pub mod nav;
pub mod page;
pub mod render;
pub mod server;

#[cfg(test)]
mod test_support;
