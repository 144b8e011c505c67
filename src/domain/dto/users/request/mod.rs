//! 사용자 요청 DTO

pub mod register_request;
pub mod login_request;

pub use register_request::RegisterRequest;
pub use login_request::LoginRequest;
