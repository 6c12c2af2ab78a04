//! Command execution.
//!
//! A command line is tokenized and its first word picks a handler. The
//! handler is then fed every remaining token, one at a time, ending with
//! the `End` token, at which point it performs its effect.

mod error;
mod play;
mod sort;

pub use error::CommandError;
pub use play::{Play, PlayEffect, PlayState};
pub use sort::{Sort, SortState};

use crate::daemon::DaemonClient;
use crate::input::{Token, TokenClass, tokenize};
use crate::song::Song;
use crate::songlist::Songlist;

/// What a command may see of the running application.
pub trait Context {
    /// The songlist the user is currently looking at.
    fn active_songlist(&self) -> &Songlist;

    /// The song under the cursor in the active songlist.
    fn cursor_song(&self) -> Option<Song>;

    /// The daemon connection, if there is one.
    fn daemon(&self) -> Option<&dyn DaemonClient>;
}

/// A per-invocation command handler.
pub trait Command {
    /// Consume one token. The `End` token commits the command's effect.
    fn execute(&mut self, ctx: &dyn Context, token: &Token) -> Result<(), CommandError>;
}

/// Look up the handler for `verb`.
pub fn new_command(verb: &str) -> Option<Box<dyn Command>> {
    match verb {
        "play" => Some(Box::new(Play::new())),
        "sort" => Some(Box::new(Sort::new())),
        _ => None,
    }
}

/// Tokenize `line` and run the command it names against `ctx`.
///
/// An empty line does nothing.
pub fn run(line: &str, ctx: &dyn Context) -> Result<(), CommandError> {
    let tokens = tokenize(line)?;
    let mut tokens = tokens.iter();

    let verb = match tokens.next() {
        None => return Ok(()),
        Some(token) if token.class == TokenClass::End => return Ok(()),
        Some(token) if token.class == TokenClass::Identifier => &token.text,
        Some(token) => return Err(CommandError::unexpected(token)),
    };
    let mut command =
        new_command(verb).ok_or_else(|| CommandError::UnknownCommand(verb.clone()))?;

    log::info!("executing '{}'", line.trim());
    for token in tokens {
        command.execute(ctx, token)?;
    }
    Ok(())
}
