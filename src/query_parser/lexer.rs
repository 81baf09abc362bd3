#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryToken<'a> {
    /// A word starting with `#`
    Operator(&'a str),
    Close,
    Word(&'a str),
}


fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '('
}


/// Splits a query into tokens
///
/// Whitespace, `,` and `(` only separate words. `)` closes the current
/// operator and is returned as its own token.
pub fn tokenize(query: &str) -> Vec<QueryToken> {
    let mut tokens = Vec::new();
    let mut word_start = None;

    for (i, c) in query.char_indices() {
        if is_separator(c) || c == ')' {
            if let Some(start) = word_start.take() {
                tokens.push(word_token(&query[start..i]));
            }

            if c == ')' {
                tokens.push(QueryToken::Close);
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }

    if let Some(start) = word_start {
        tokens.push(word_token(&query[start..]));
    }

    tokens
}


fn word_token(word: &str) -> QueryToken {
    if word.starts_with('#') {
        QueryToken::Operator(word)
    } else {
        QueryToken::Word(word)
    }
}
