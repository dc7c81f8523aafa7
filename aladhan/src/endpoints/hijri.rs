use chrono::NaiveDate;

use crate::{
    client::Client,
    error::Error,
    model::{date::format_aladhan_date, GregorianToHijri},
};

pub struct HijriEndpoints<'a> {
    client: &'a Client,
}

impl<'a> HijriEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Converts a single Gregorian date to the Hijri calendar.
    ///
    /// `GET /gToH?date=DD-MM-YYYY`. The conversion depends on the date alone.
    pub async fn gregorian_to_hijri(&self, date: NaiveDate) -> Result<GregorianToHijri, Error> {
        self.client
            .get("/gToH", &[("date", format_aladhan_date(date))])
            .await
    }
}
