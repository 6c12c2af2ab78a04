use super::{Command, CommandError, Context};
use crate::input::{Token, TokenClass};

/// Grammar state of `sort <field>...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortState {
    Fields(Vec<String>),
    Finished,
}

impl Default for SortState {
    fn default() -> Self {
        Self::Fields(Vec::new())
    }
}

impl SortState {
    /// Advance over one token; `End` yields the collected fields.
    pub fn step(self, token: &Token) -> Result<(Self, Option<Vec<String>>), CommandError> {
        match (self, token.class) {
            (Self::Fields(mut fields), TokenClass::Identifier) => {
                fields.push(token.text.to_ascii_lowercase());
                Ok((Self::Fields(fields), None))
            }
            (Self::Fields(fields), TokenClass::End) => Ok((Self::Finished, Some(fields))),
            (_, _) => Err(CommandError::unexpected(token)),
        }
    }
}

/// Sort the active songlist by the given tags.
///
/// Each tag is a stable pass over the previous one, so the last tag named
/// is the primary order: `sort title album` groups by album.
#[derive(Debug, Default)]
pub struct Sort {
    state: SortState,
}

impl Sort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for Sort {
    fn execute(&mut self, ctx: &dyn Context, token: &Token) -> Result<(), CommandError> {
        let (state, fields) = std::mem::take(&mut self.state).step(token)?;
        self.state = state;
        if let Some(fields) = fields {
            ctx.active_songlist().sort(&fields)?;
        }
        Ok(())
    }
}
