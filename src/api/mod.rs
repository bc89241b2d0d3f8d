pub mod client;
pub mod register;

pub use client::*;
pub use register::Registrar;
