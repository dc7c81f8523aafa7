//! Verse of the day for the dashboard.
//!
//! Each local date maps to one verse from a curated list of verses on mercy, fasting,
//! reward and forgiveness. The Arabic text and English translation are fetched from
//! Al-Quran Cloud and kept in the [`AyahCache`] for the rest of the day.

pub mod cache;

#[cfg(test)]
mod tests;

use alquran::model::AyahEdition;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use tracing::debug;
use uuid::Uuid;

use crate::{
    model::ayah::{AyahDto, VerseKey},
    server::{
        data::user_settings::UserSettingsRepository,
        error::{ayah::AyahError, Error},
        service::{ayah::cache::AyahCache, prayer::PrayerService},
        util::time::local_now,
    },
};

pub static ARABIC_EDITION: &str = "ar.quran-uthmani";
pub static ENGLISH_EDITION: &str = "en.sahih";

pub static CURATED_AYAT: [VerseKey; 19] = [
    VerseKey::new(2, 183),
    VerseKey::new(2, 186),
    VerseKey::new(2, 277),
    VerseKey::new(3, 31),
    VerseKey::new(3, 134),
    VerseKey::new(4, 36),
    VerseKey::new(5, 32),
    VerseKey::new(7, 56),
    VerseKey::new(9, 71),
    VerseKey::new(14, 7),
    VerseKey::new(17, 24),
    VerseKey::new(25, 63),
    VerseKey::new(28, 77),
    VerseKey::new(39, 53),
    VerseKey::new(42, 30),
    VerseKey::new(57, 21),
    VerseKey::new(93, 5),
    VerseKey::new(94, 5),
    VerseKey::new(2, 152),
];

/// The curated verse for `date`, stable for the whole day.
///
/// The day key is `"{year}-{month0}-{day}"` with a zero-based month, hashed with a 31
/// multiplier in 32-bit arithmetic so clients computing the same key agree on the verse.
pub fn verse_for_date(date: NaiveDate) -> VerseKey {
    let key = format!("{}-{}-{}", date.year(), date.month0(), date.day());

    let hash = key
        .bytes()
        .fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(byte as u32));

    CURATED_AYAT[hash as usize % CURATED_AYAT.len()]
}

pub struct AyahService<'a> {
    db: &'a DatabaseConnection,
    aladhan_client: &'a aladhan::Client,
    quran_client: &'a alquran::Client,
    cache: &'a AyahCache,
}

impl<'a> AyahService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        aladhan_client: &'a aladhan::Client,
        quran_client: &'a alquran::Client,
        cache: &'a AyahCache,
    ) -> Self {
        Self {
            db,
            aladhan_client,
            quran_client,
            cache,
        }
    }

    /// Verse of the day for a user, with "today" taken in the user's timezone.
    pub async fn today(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<AyahDto, Error> {
        let settings = UserSettingsRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        let timezone = match &settings {
            Some(settings) => {
                PrayerService::new(self.db, self.aladhan_client)
                    .resolve_timezone(settings, now)
                    .await
            }
            None => None,
        };

        self.for_date(local_now(timezone.as_deref(), now).date())
            .await
    }

    /// Verse picked for `date`, from the cache or Al-Quran Cloud.
    ///
    /// Failed lookups are not cached.
    ///
    /// # Returns
    /// - `Ok(AyahDto)` - Arabic text and English translation of the day's verse
    /// - `Err(Error::QuranError)` - Verse request failed
    /// - `Err(Error::AyahError)` - Response lacked the English text or surah details
    pub async fn for_date(&self, date: NaiveDate) -> Result<AyahDto, Error> {
        if let Some(ayah) = self.cache.get(date).await {
            debug!(%date, "Ayah cache hit");

            return Ok(ayah);
        }

        let key = verse_for_date(date);
        let editions = self
            .quran_client
            .ayah()
            .editions(key.surah, key.ayah, &[ARABIC_EDITION, ENGLISH_EDITION])
            .await?;

        let ayah = build_ayah(date, key, &editions)?;

        self.cache.insert(ayah.clone()).await;

        Ok(ayah)
    }
}

/// Combines the Arabic and English editions of `key`.
///
/// The English text is required; a missing Arabic edition yields empty Arabic text.
fn build_ayah(date: NaiveDate, key: VerseKey, editions: &[AyahEdition]) -> Result<AyahDto, AyahError> {
    let arabic = editions.iter().find(|edition| edition.is_language("ar"));
    let english = editions.iter().find(|edition| edition.is_language("en"));

    let english_text = english
        .and_then(|edition| edition.text.clone())
        .filter(|text| !text.is_empty())
        .ok_or(AyahError::Incomplete {
            key,
            reason: "missing English text",
        })?;

    let surah = arabic
        .and_then(|edition| edition.surah.as_ref())
        .or_else(|| english.and_then(|edition| edition.surah.as_ref()))
        .ok_or(AyahError::Incomplete {
            key,
            reason: "missing surah details",
        })?;

    Ok(AyahDto {
        date,
        arabic: arabic
            .and_then(|edition| edition.text.clone())
            .unwrap_or_default(),
        english: english_text,
        surah_name: surah.english_name.clone().unwrap_or_default(),
        surah_number: surah.number.unwrap_or(key.surah),
        ayah_number: english
            .and_then(|edition| edition.number_in_surah)
            .unwrap_or(key.ayah),
    })
}
