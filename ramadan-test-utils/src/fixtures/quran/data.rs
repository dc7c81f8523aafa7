//! Al-Quran Cloud payload factories.

use alquran::model::{AyahEdition, Edition, SurahInfo};

fn mock_edition(surah: u32, ayah: u32, identifier: &str, language: &str, text: &str) -> AyahEdition {
    AyahEdition {
        text: Some(text.to_string()),
        edition: Some(Edition {
            identifier: Some(identifier.to_string()),
            language: Some(language.to_string()),
        }),
        surah: Some(SurahInfo {
            number: Some(surah),
            english_name: Some(format!("Surah {}", surah)),
        }),
        number_in_surah: Some(ayah),
    }
}

/// Arabic and English editions of one verse, with placeholder texts naming the verse.
pub fn mock_ayah_editions(surah: u32, ayah: u32) -> Vec<AyahEdition> {
    vec![
        mock_edition(surah, ayah, "ar.quran-uthmani", "ar", &format!("آية {}:{}", surah, ayah)),
        mock_edition(surah, ayah, "en.sahih", "en", &format!("Verse {}:{}", surah, ayah)),
    ]
}

/// Only the Arabic edition of one verse.
pub fn mock_arabic_only_editions(surah: u32, ayah: u32) -> Vec<AyahEdition> {
    mock_ayah_editions(surah, ayah)
        .into_iter()
        .filter(|edition| edition.is_language("ar"))
        .collect()
}
