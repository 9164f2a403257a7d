pub mod adapter;
pub mod components;
pub mod controller;
pub mod dom;
pub mod host;
pub mod indicator;
pub mod store;
pub mod views;
mod utils;
mod routes;
mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::ThemeConfig;
pub use crate::controller::ThemeController;
pub use crate::error::ThemeError;
