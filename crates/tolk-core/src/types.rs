use serde::{Deserialize, Serialize};

/// Chat channel categories as reported by the host client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Public,
    Moderator,
    Friends,
    Private,
    PrivateOut,
    ModeratorPrivate,
    Clan,
    ClanGuest,
    ClanGroup,
    Game,
    System,
    Broadcast,
    Trade,
    Welcome,
}

/// One chat line as delivered by the host client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEvent {
    pub channel: ChannelKind,
    pub sender: String,
    pub text: String,
    /// Opaque recipient handle, carried through to the rendered line.
    #[serde(default)]
    pub recipient: Option<String>,
}

/// Wire envelope for frames arriving over the chat feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedMessage {
    Chat(ChatEvent),
    Config {
        group: String,
        key: String,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    ChatMessage(ChatEvent),
    ConfigUpdate {
        group: String,
        key: String,
        value: String,
    },
    RenderChatLine {
        channel: ChannelKind,
        sender: String,
        text: String,
        recipient: Option<String>,
    },
}
