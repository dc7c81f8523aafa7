use crate::{client::Client, error::Error, model::CalendarDay};

pub struct CalendarEndpoints<'a> {
    client: &'a Client,
}

impl<'a> CalendarEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the Gregorian dates making up one Hijri month, in order.
    ///
    /// `GET /hToGCalendar/{month}/{year}`
    pub async fn hijri_to_gregorian_calendar(
        &self,
        hijri_month: u32,
        hijri_year: i32,
    ) -> Result<Vec<CalendarDay>, Error> {
        let path = format!("/hToGCalendar/{}/{}", hijri_month, hijri_year);

        self.client.get(&path, &[]).await
    }
}
