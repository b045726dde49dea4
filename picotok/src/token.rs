// SPDX-License-Identifier: Apache-2.0

/// Lexical tokens produced by the [`Scanner`](crate::Scanner)
///
/// A token carries no payload. [`Token::Number`] and [`Token::String`] must be
/// followed by a call to [`Scanner::read_number`](crate::Scanner::read_number)
/// or [`Scanner::read_string`](crate::Scanner::read_string) before asking for
/// the next token, otherwise the payload bytes are scanned as if they were
/// the start of the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// The literal `null`.
    Null,
    /// The literal `true`.
    True,
    /// The literal `false`.
    False,
    /// A number; extract it with `read_number`.
    Number,
    /// A string; extract it with `read_string`.
    String,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `:`
    ObjectColon,
    /// `,`
    Comma,
}

impl Token {
    /// True for tokens whose payload still has to be extracted.
    pub const fn has_payload(self) -> bool {
        matches!(self, Token::Number | Token::String)
    }

    /// Short human readable name of the token
    pub const fn as_str(self) -> &'static str {
        match self {
            Token::Null => "null",
            Token::True => "true",
            Token::False => "false",
            Token::Number => "number",
            Token::String => "string",
            Token::ArrayOpen => "[",
            Token::ArrayClose => "]",
            Token::ObjectOpen => "{",
            Token::ObjectClose => "}",
            Token::ObjectColon => ":",
            Token::Comma => ",",
        }
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
