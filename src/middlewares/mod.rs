pub mod access_token;
pub mod error_handling;
pub mod inject_user_agent;
