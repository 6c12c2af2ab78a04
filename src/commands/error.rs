use crate::daemon::DaemonError;
use crate::input::{LexError, Token, TokenClass};
use crate::songlist::SonglistError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("no song under cursor")]
    NoCursorSong,

    #[error("song has no file to queue")]
    MissingFile,

    #[error("not connected to the music daemon")]
    NotConnected,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unexpected {class} '{text}'")]
    UnexpectedToken { class: TokenClass, text: String },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Daemon(#[from] DaemonError),

    #[error(transparent)]
    Songlist(#[from] SonglistError),
}

impl CommandError {
    pub fn unexpected(token: &Token) -> Self {
        Self::UnexpectedToken {
            class: token.class,
            text: token.text.clone(),
        }
    }
}
