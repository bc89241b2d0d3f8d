pub mod common;
pub mod home;
pub mod register;

pub use common::Notification;
pub use home::HomePage;
pub use register::RegisterPage;
