//! HashMap / Vec を使ったインメモリ実装。プロセス再起動で内容は失われます。

pub mod conversation;
pub mod message;
pub mod presence;
pub mod profile;

pub use conversation::InMemoryConversationRepository;
pub use message::InMemoryMessageRepository;
pub use presence::InMemoryPresenceRepository;
pub use profile::InMemoryProfileRepository;
