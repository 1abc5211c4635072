pub mod config;
pub mod error;
pub mod game;
pub mod http_api;

#[cfg(test)]
mod test_utils;
