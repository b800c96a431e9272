// --- Blank hints ---

/// Progressive hint levels offered on a blank during the fill step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintLevel {
    FirstChar,
    LastChar,
    Choseong,
}

impl HintLevel {
    pub fn all() -> &'static [HintLevel] {
        &[HintLevel::FirstChar, HintLevel::LastChar, HintLevel::Choseong]
    }
}

const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;
// 21 vowels x 28 final consonants per leading-consonant block.
const SYLLABLES_PER_CHOSEONG: u32 = 588;

const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Leading consonant (compatibility jamo) of a precomposed Hangul
/// syllable; `None` for anything outside U+AC00..=U+D7A3.
pub fn choseong(ch: char) -> Option<char> {
    let code = ch as u32;
    if !(HANGUL_BASE..=HANGUL_LAST).contains(&code) {
        return None;
    }
    let index = ((code - HANGUL_BASE) / SYLLABLES_PER_CHOSEONG) as usize;
    Some(CHOSEONG[index])
}

/// Hint text for a blank's keyword. The first two levels reveal a single
/// character; the third reduces the whole word to its choseong skeleton,
/// passing non-Hangul characters through unchanged.
pub fn hint(word: &str, level: HintLevel) -> String {
    match level {
        HintLevel::FirstChar => word.chars().next().map(String::from).unwrap_or_default(),
        HintLevel::LastChar => word.chars().last().map(String::from).unwrap_or_default(),
        HintLevel::Choseong => word.chars().map(|ch| choseong(ch).unwrap_or(ch)).collect(),
    }
}
