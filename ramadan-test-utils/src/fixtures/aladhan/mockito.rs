//! Mock Aladhan endpoints.
//!
//! Every body is wrapped in the `{"code":200,"status":"OK","data":...}` envelope.

use aladhan::model::{date::format_aladhan_date, CalendarDay, GregorianToHijri, TimingsData};
use chrono::NaiveDate;
use mockito::{Matcher, Mock};
use serde_json::json;

use crate::fixtures::aladhan::AladhanFixtures;

fn envelope(data: serde_json::Value) -> String {
    json!({ "code": 200, "status": "OK", "data": data }).to_string()
}

impl<'a> AladhanFixtures<'a> {
    /// Mock `GET /gToH?date=DD-MM-YYYY` for one Gregorian date.
    pub fn create_gregorian_to_hijri_endpoint(
        &mut self,
        date: NaiveDate,
        hijri: GregorianToHijri,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/gToH")
            .match_query(Matcher::UrlEncoded(
                "date".to_string(),
                format_aladhan_date(date),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(json!(hijri)))
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /hToGCalendar/9/{hijri_year}`.
    pub fn create_ramadan_calendar_endpoint(
        &mut self,
        hijri_year: i32,
        days: Vec<CalendarDay>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/hToGCalendar/9/{}", hijri_year);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(json!(days)))
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /timings/{timestamp}` for any timestamp and query.
    pub fn create_timings_endpoint(
        &mut self,
        data: TimingsData,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", Matcher::Regex(r"^/timings/\d+$".to_string()))
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(json!(data)))
            .expect(expected_requests)
            .create()
    }

    /// Mock any Aladhan path responding with an HTTP error status.
    pub fn create_failing_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
