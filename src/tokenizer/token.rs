// --- Token ---

/// One piece of tokenized study text. Concatenating `value()` over a token
/// list reproduces the source text exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Run of non-whitespace characters containing no keyword start.
    Text(String),
    /// Run of spaces and tabs, preserved verbatim.
    Space(String),
    /// A single `'\n'`.
    Newline,
    Keyword(KeywordToken),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordToken {
    pub value: String,
    /// 1-based index among appearances of the same keyword text.
    pub occurrence: u32,
    /// 1-based position among all keyword tokens in scan order. Unique
    /// within one tokenization, so duplicate words stay independent blanks.
    pub instance_id: u32,
}

impl Token {
    pub fn value(&self) -> &str {
        match self {
            Token::Text(value) => value,
            Token::Space(value) => value,
            Token::Newline => "\n",
            Token::Keyword(keyword) => &keyword.value,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Keyword(_))
    }
}

// --- Keyword instances ---

/// Flattened view of one keyword token; the unit every answer, grade, and
/// progress slot is keyed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordInstance {
    pub instance_id: u32,
    pub word: String,
}

pub fn keyword_instances(tokens: &[Token]) -> Vec<KeywordInstance> {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Keyword(keyword) => Some(KeywordInstance {
                instance_id: keyword.instance_id,
                word: keyword.value.clone(),
            }),
            _ => None,
        })
        .collect()
}
