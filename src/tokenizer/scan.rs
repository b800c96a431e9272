use crate::tokenizer::token::{KeywordToken, Token};

// --- Keyword table ---

/// Keywords prepared for scanning: empty strings dropped, duplicates
/// collapsed (they share one occurrence counter), sorted longest first. The
/// sort is stable, so equal-length keywords keep caller order.
struct KeywordTable {
    words: Vec<String>,
}

impl KeywordTable {
    fn new(keywords: &[String]) -> Self {
        let mut words: Vec<String> = Vec::new();
        for keyword in keywords {
            if !keyword.is_empty() && !words.contains(keyword) {
                words.push(keyword.clone());
            }
        }
        words.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
        Self { words }
    }

    /// Index of the longest keyword starting at `rest`, if any. Longest-first
    /// order makes the first hit the longest match.
    fn match_at(&self, rest: &str) -> Option<usize> {
        self.words.iter().position(|word| rest.starts_with(word.as_str()))
    }
}

// --- Scanner ---

/// Split `text` into a lossless token stream, recognizing `keywords` with
/// longest-match-first priority. Pure function: occurrence counters and
/// instance ids are scoped to this call.
pub fn tokenize(text: &str, keywords: &[String]) -> Vec<Token> {
    let table = KeywordTable::new(keywords);
    let mut tokens = Vec::new();
    let mut occurrences = vec![0u32; table.words.len()];
    let mut next_instance = 1u32;

    let mut i = 0;
    while let Some(ch) = text[i..].chars().next() {
        let rest = &text[i..];

        if ch == '\n' {
            tokens.push(Token::Newline);
            i += 1;
            continue;
        }

        if ch == ' ' || ch == '\t' {
            let end = rest
                .find(|c: char| c != ' ' && c != '\t')
                .unwrap_or(rest.len());
            tokens.push(Token::Space(rest[..end].to_string()));
            i += end;
            continue;
        }

        if let Some(index) = table.match_at(rest) {
            let word = &table.words[index];
            occurrences[index] += 1;
            tokens.push(Token::Keyword(KeywordToken {
                value: word.clone(),
                occurrence: occurrences[index],
                instance_id: next_instance,
            }));
            next_instance += 1;
            i += word.len();
            continue;
        }

        // Text run: at least one character, extending until whitespace or
        // any position where a keyword match begins. Keywords embedded
        // mid-word still get recognized on the next iteration.
        let mut end = ch.len_utf8();
        while let Some(next) = rest[end..].chars().next() {
            if next == '\n' || next == ' ' || next == '\t' {
                break;
            }
            if table.match_at(&rest[end..]).is_some() {
                break;
            }
            end += next.len_utf8();
        }
        tokens.push(Token::Text(rest[..end].to_string()));
        i += end;
    }

    tokens
}
