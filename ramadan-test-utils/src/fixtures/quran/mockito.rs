//! Mock Al-Quran Cloud endpoints.

use alquran::model::AyahEdition;
use mockito::Mock;
use serde_json::json;

use crate::fixtures::quran::QuranFixtures;

impl<'a> QuranFixtures<'a> {
    /// Mock `GET /ayah/{surah}:{ayah}/editions/ar.quran-uthmani,en.sahih`.
    pub fn create_ayah_endpoint(
        &mut self,
        surah: u32,
        ayah: u32,
        editions: Vec<AyahEdition>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/ayah/{}:{}/editions/ar.quran-uthmani,en.sahih", surah, ayah);
        let body = json!({ "code": 200, "status": "OK", "data": editions }).to_string();

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
