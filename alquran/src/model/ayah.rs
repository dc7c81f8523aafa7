use serde::{Deserialize, Serialize};

/// One verse in one edition, an element of `GET /ayah/{surah}:{ayah}/editions/{editions}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahEdition {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub edition: Option<Edition>,
    #[serde(default)]
    pub surah: Option<SurahInfo>,
    #[serde(default)]
    pub number_in_surah: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    /// e.g. `"en.sahih"`
    #[serde(default)]
    pub identifier: Option<String>,
    /// ISO 639-1 code, e.g. `"ar"`
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahInfo {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub english_name: Option<String>,
}

impl AyahEdition {
    /// Whether this entry is in the given ISO 639-1 language.
    pub fn is_language(&self, language: &str) -> bool {
        self.edition
            .as_ref()
            .and_then(|edition| edition.language.as_deref())
            == Some(language)
    }
}
