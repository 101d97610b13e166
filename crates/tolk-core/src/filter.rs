use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ChannelKind, ChatEvent};

/// Prepended to sender names on translated output. Messages whose sender
/// already carries it are never picked up again.
pub const SENDER_PREFIX: &str = "AutoTranslator: ";

// Letter run, non-letter run, letter run from the start of the trimmed
// message; skips single-word and non-linguistic text before detection.
static LEXICAL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+[^A-Za-z]+[A-Za-z]+").unwrap());

/// Whether a chat event is worth running through the detector at all.
pub fn is_eligible(event: &ChatEvent) -> bool {
    if event.sender.starts_with(SENDER_PREFIX) {
        return false;
    }

    if !is_player_channel(event.channel) {
        return false;
    }

    LEXICAL_SHAPE.is_match(event.text.trim())
}

/// Channels that carry player-written text.
pub fn is_player_channel(channel: ChannelKind) -> bool {
    matches!(
        channel,
        ChannelKind::Public
            | ChannelKind::Moderator
            | ChannelKind::Friends
            | ChannelKind::Private
            | ChannelKind::PrivateOut
            | ChannelKind::ModeratorPrivate
            | ChannelKind::Clan
            | ChannelKind::ClanGuest
            | ChannelKind::ClanGroup
    )
}
