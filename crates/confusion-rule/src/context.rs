// Neighbor context of a token within its sentence

use confusion_core::token::Token;

/// Text of the token at `index`, or `None` when `index` falls outside the
/// sentence.
///
/// No sentence-start or sentence-end marker is substituted at the edges;
/// the frequency data has none to match against.
pub fn neighbor_at(tokens: &[Token], index: isize) -> Option<&str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| tokens.get(i))
        .map(|token| token.text.as_str())
}

/// The two tokens on each side of a token. Slots past a sentence edge are
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborContext<'a> {
    pub prev2: Option<&'a str>,
    pub prev1: Option<&'a str>,
    pub next1: Option<&'a str>,
    pub next2: Option<&'a str>,
}

impl<'a> NeighborContext<'a> {
    /// Context of the token at `pos`.
    pub fn at(tokens: &'a [Token], pos: usize) -> Self {
        let pos = pos as isize;
        Self {
            prev2: neighbor_at(tokens, pos - 2),
            prev1: neighbor_at(tokens, pos - 1),
            next1: neighbor_at(tokens, pos + 1),
            next2: neighbor_at(tokens, pos + 2),
        }
    }

    /// All four slots in sentence order.
    pub fn slots(&self) -> [Option<&'a str>; 4] {
        [self.prev2, self.prev1, self.next1, self.next2]
    }

    /// Whether any present neighbor contains a comma.
    ///
    /// The n-gram corpus has no punctuation, so trigrams spanning a comma
    /// would always count zero.
    pub fn contains_comma(&self) -> bool {
        self.slots().into_iter().flatten().any(|text| text.contains(','))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        let mut pos = 0;
        words
            .iter()
            .map(|w| {
                let t = Token::new(*w, pos);
                pos = t.end_pos() + 1;
                t
            })
            .collect()
    }

    #[test]
    fn neighbor_inside_sentence() {
        let toks = tokens(&["I", "saw", "there", "car"]);
        assert_eq!(neighbor_at(&toks, 0), Some("I"));
        assert_eq!(neighbor_at(&toks, 3), Some("car"));
    }

    #[test]
    fn neighbor_outside_sentence_is_absent() {
        let toks = tokens(&["I", "saw"]);
        assert_eq!(neighbor_at(&toks, -1), None);
        assert_eq!(neighbor_at(&toks, -2), None);
        assert_eq!(neighbor_at(&toks, 2), None);
        assert_eq!(neighbor_at(&toks, 3), None);
    }

    #[test]
    fn context_in_the_middle() {
        let toks = tokens(&["we", "saw", "there", "house", "today"]);
        let ctx = NeighborContext::at(&toks, 2);
        assert_eq!(
            ctx,
            NeighborContext {
                prev2: Some("we"),
                prev1: Some("saw"),
                next1: Some("house"),
                next2: Some("today"),
            }
        );
    }

    #[test]
    fn context_at_sentence_start() {
        let toks = tokens(&["there", "is", "hope"]);
        let ctx = NeighborContext::at(&toks, 0);
        assert_eq!(ctx.prev2, None);
        assert_eq!(ctx.prev1, None);
        assert_eq!(ctx.next1, Some("is"));
        assert_eq!(ctx.next2, Some("hope"));
    }

    #[test]
    fn context_at_sentence_end() {
        let toks = tokens(&["over", "there"]);
        let ctx = NeighborContext::at(&toks, 1);
        assert_eq!(ctx.prev2, None);
        assert_eq!(ctx.prev1, Some("over"));
        assert_eq!(ctx.next1, None);
        assert_eq!(ctx.next2, None);
    }

    #[test]
    fn isolated_token_has_no_neighbors() {
        let toks = tokens(&["there"]);
        let ctx = NeighborContext::at(&toks, 0);
        assert_eq!(ctx, NeighborContext::default());
        assert!(!ctx.contains_comma());
    }

    #[test]
    fn comma_in_any_slot() {
        let toks = tokens(&["well", ",", "there", "it", "is"]);
        assert!(NeighborContext::at(&toks, 2).contains_comma());

        let toks = tokens(&["there", "it", "is,"]);
        assert!(NeighborContext::at(&toks, 0).contains_comma());
    }

    #[test]
    fn comma_outside_window_is_ignored() {
        let toks = tokens(&["yes", ",", "I", "saw", "there", "car"]);
        assert!(!NeighborContext::at(&toks, 4).contains_comma());
    }

    #[test]
    fn comma_in_the_token_itself_is_ignored() {
        let toks = tokens(&["I", "saw", "there,", "car"]);
        assert!(!NeighborContext::at(&toks, 2).contains_comma());
    }
}
