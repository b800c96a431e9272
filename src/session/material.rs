use serde::{Deserialize, Serialize};

/// Study payload handed over by the OCR/extraction backend. Wire format is
/// camelCase JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyMaterial {
    pub title: String,
    pub extracted_text: String,
    #[serde(default)]
    pub blanks: Vec<KeywordEntry>,
}

/// One keyword definition. Meaning text stays optional until the meaning
/// service has backfilled it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEntry {
    pub id: u32,
    pub word: String,
    #[serde(default)]
    pub meaning_long: Option<String>,
}

impl StudyMaterial {
    /// Keyword list for tokenization, in payload order.
    pub fn keyword_list(&self) -> Vec<String> {
        self.blanks.iter().map(|entry| entry.word.clone()).collect()
    }

    /// Definition lookup by keyword text; the first definition wins when a
    /// word is listed twice.
    pub fn entry_for(&self, word: &str) -> Option<&KeywordEntry> {
        self.blanks.iter().find(|entry| entry.word == word)
    }
}
