use std::fmt;

const SYMBOLS: &[char] = &[';', '=', ',', '!'];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenClass {
    /// A bare word such as `play` or `cursor`.
    Identifier,
    /// A double-quoted string, unescaped.
    Quoted,
    /// A single punctuation character.
    Symbol,
    /// End of the command line; always the last token.
    End,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Identifier => "identifier",
            Self::Quoted => "quoted string",
            Self::Symbol => "symbol",
            Self::End => "end of input",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub text: String,
}

impl Token {
    pub fn new(class: TokenClass, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
        }
    }

    pub fn identifier(text: impl Into<String>) -> Self {
        Self::new(TokenClass::Identifier, text)
    }

    pub fn end() -> Self {
        Self::new(TokenClass::End, "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated quoted string starting at column {0}")]
    UnterminatedQuote(usize),
}

/// Split `line` into tokens, always terminated by an `End` token.
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '"' {
            chars.next();
            let mut text = String::new();
            let mut closed = false;
            while let Some((_, c)) = chars.next() {
                match c {
                    '"' => {
                        closed = true;
                        break;
                    }
                    '\\' => match chars.next() {
                        Some((_, escaped)) => text.push(escaped),
                        None => break,
                    },
                    _ => text.push(c),
                }
            }
            if !closed {
                return Err(LexError::UnterminatedQuote(start));
            }
            tokens.push(Token::new(TokenClass::Quoted, text));
        } else if SYMBOLS.contains(&c) {
            chars.next();
            tokens.push(Token::new(TokenClass::Symbol, c));
        } else {
            let mut text = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if c.is_whitespace() || c == '"' || SYMBOLS.contains(&c) {
                    break;
                }
                text.push(c);
                chars.next();
            }
            tokens.push(Token::identifier(text));
        }
    }

    tokens.push(Token::end());
    Ok(tokens)
}
