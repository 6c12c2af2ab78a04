use super::{Command, CommandError, Context};
use crate::daemon::DaemonClient;
use crate::input::{Token, TokenClass};
use crate::song::{Song, SongId};

/// Grammar state of `play [cursor]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Start,
    /// `cursor` resolved this song.
    Cursor(Song),
    Finished,
}

/// What `play` asks of the daemon once the line is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayEffect {
    /// Resume from the current queue position.
    Resume,
    /// Play an already queued song.
    PlayId(u32),
    /// Queue the file first, then play it under its new id.
    QueueAndPlay(String),
}

impl PlayState {
    /// Advance over one token.
    ///
    /// Only `End` produces an effect. Unknown words are ignored so that
    /// further modifiers can be added without breaking older input.
    pub fn step(
        self,
        ctx: &dyn Context,
        token: &Token,
    ) -> Result<(Self, Option<PlayEffect>), CommandError> {
        match (self, token.class) {
            (Self::Finished, _) => Err(CommandError::unexpected(token)),
            (state, TokenClass::Identifier) => match token.text.as_str() {
                "cursor" => {
                    let song = ctx.cursor_song().ok_or(CommandError::NoCursorSong)?;
                    Ok((Self::Cursor(song), None))
                }
                _ => Ok((state, None)),
            },
            (Self::Start, TokenClass::End) => Ok((Self::Finished, Some(PlayEffect::Resume))),
            (Self::Cursor(song), TokenClass::End) => {
                let effect = match song.id {
                    SongId::Known(id) => PlayEffect::PlayId(id),
                    SongId::Unassigned => {
                        let file = song.file().ok_or(CommandError::MissingFile)?;
                        PlayEffect::QueueAndPlay(file.to_string())
                    }
                };
                Ok((Self::Finished, Some(effect)))
            }
            (_, _) => Err(CommandError::unexpected(token)),
        }
    }
}

impl PlayEffect {
    pub fn apply(&self, client: &dyn DaemonClient) -> Result<(), CommandError> {
        match self {
            Self::Resume => client.play(None)?,
            Self::PlayId(id) => client.play_id(*id)?,
            Self::QueueAndPlay(file) => {
                let id = client.add_id(file, None)?;
                log::debug!("queued '{file}' as id {id}");
                client.play_id(id)?;
            }
        }
        Ok(())
    }
}

/// `play`: resume playback. `play cursor`: play the song under the cursor.
#[derive(Debug, Default)]
pub struct Play {
    state: PlayState,
}

impl Play {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }
}

impl Command for Play {
    fn execute(&mut self, ctx: &dyn Context, token: &Token) -> Result<(), CommandError> {
        let (state, effect) = std::mem::take(&mut self.state).step(ctx, token)?;
        self.state = state;
        if let Some(effect) = effect {
            let client = ctx.daemon().ok_or(CommandError::NotConnected)?;
            log::info!("play: {effect:?}");
            effect.apply(client)?;
        }
        Ok(())
    }
}
