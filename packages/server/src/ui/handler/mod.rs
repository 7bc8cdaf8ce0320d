//! Handler modules for HTTP and WebSocket endpoints.

pub mod conversation;
pub mod http;
pub mod message;
pub mod profile;
pub mod websocket;

// Re-export HTTP handlers
pub use conversation::{find_or_create_conversation, list_conversations};
pub use http::{health_check, online_users};
pub use message::{list_messages, post_message};
pub use profile::{get_my_profile, get_profile, search_profiles, update_my_profile};

// Re-export WebSocket handlers
pub use websocket::websocket_handler;
