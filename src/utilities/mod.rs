pub mod direction;
pub mod error;
pub mod event;
pub mod request;
pub mod status;
