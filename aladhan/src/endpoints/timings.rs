use crate::{client::Client, error::Error, model::TimingsData};

pub struct TimingsEndpoints<'a> {
    client: &'a Client,
}

impl<'a> TimingsEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Prayer times for the day containing `timestamp` at the given coordinates.
    ///
    /// `GET /timings/{timestamp}?latitude=&longitude=&method=`
    pub async fn timings(
        &self,
        timestamp: i64,
        latitude: f64,
        longitude: f64,
        method: i32,
    ) -> Result<TimingsData, Error> {
        let path = format!("/timings/{}", timestamp);
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("method", method.to_string()),
        ];

        self.client.get(&path, &query).await
    }
}
