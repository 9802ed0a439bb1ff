// Token type consumed by sentence rules

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A word token from the upstream tokenizer.
///
/// Rules never mutate tokens. Whitespace is expected to be stripped before a
/// sentence reaches a rule, so neighboring tokens in a slice are neighboring
/// words (or punctuation) of the sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Position of this token within the text (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token starting at character offset `pos`.
    pub fn new(text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            text,
            token_len,
            pos,
        }
    }

    /// Character offset one past the last character of the token.
    pub fn end_pos(&self) -> usize {
        self.pos + self.token_len
    }
}
