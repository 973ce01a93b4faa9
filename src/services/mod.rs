pub mod draw_service;

pub use draw_service::*;
