//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod close_connection;
pub mod conversation;
pub mod error;
pub mod message;
pub mod open_connection;
pub mod profile;
pub mod register_presence;
pub mod relay_message;

pub use close_connection::CloseConnectionUseCase;
pub use conversation::{ConversationSummary, FindOrCreateConversationUseCase, ListConversationsUseCase};
pub use error::{ConversationError, MessageError, ProfileError};
pub use message::{ListMessagesUseCase, PostMessageUseCase};
pub use open_connection::OpenConnectionUseCase;
pub use profile::{GetProfileUseCase, SearchProfilesUseCase, UpdateProfileUseCase};
pub use register_presence::RegisterPresenceUseCase;
pub use relay_message::{RelayMessageUseCase, RelayOutcome};
