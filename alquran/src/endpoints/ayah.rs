use crate::{client::Client, error::Error, model::AyahEdition};

pub struct AyahEndpoints<'a> {
    client: &'a Client,
}

impl<'a> AyahEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// One verse in each of the requested editions.
    ///
    /// `GET /ayah/{surah}:{ayah}/editions/{edition,edition,...}`
    pub async fn editions(
        &self,
        surah: u32,
        ayah: u32,
        editions: &[&str],
    ) -> Result<Vec<AyahEdition>, Error> {
        let path = format!("/ayah/{}:{}/editions/{}", surah, ayah, editions.join(","));

        self.client.get(&path).await
    }
}
