mod gateway_service;
mod ws_handler;

pub use gateway_service::*;
pub use ws_handler::*;
