use std::{collections::HashSet, time::Duration};

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    model::tracker::{TrackerDayDto, RAMADAN_DAYS},
    server::{
        data::tracker_day::TrackerDayRepository,
        error::{tracker::TrackerError, Error},
        service::{
            ramadan::{validate_year, RamadanService},
            tracker::TrackerService,
        },
        util::time::{calendar_dates, expected_date},
    },
};

impl<'a> TrackerService<'a> {
    /// [`Self::ensure_calendar`] bounded by `timeout`.
    ///
    /// # Returns
    /// - `Err(Error::TrackerError(TrackerError::Timeout))` - Did not finish in time, safe to retry
    pub async fn ensure_calendar_with_timeout(
        &self,
        user_id: Uuid,
        year: i32,
        timeout: Duration,
    ) -> Result<Vec<TrackerDayDto>, Error> {
        tokio::time::timeout(timeout, self.ensure_calendar(user_id, year))
            .await
            .map_err(|_| TrackerError::Timeout(timeout))?
    }

    /// Make sure the user has all 30 days for `year`, each dated from the resolved start.
    ///
    /// A new calendar is created in one ignore-on-conflict insert. For an existing calendar,
    /// rows with a stale date are moved one statement at a time without touching logged
    /// fields, then missing day numbers are filled in. A failed repair leaves earlier rows
    /// corrected, so calling again is safe.
    ///
    /// # Returns
    /// - `Ok(Vec<TrackerDayDto>)` - The calendar ordered by day number
    /// - `Err(Error::TrackerError)` - Year outside the supported range
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn ensure_calendar(
        &self,
        user_id: Uuid,
        year: i32,
    ) -> Result<Vec<TrackerDayDto>, Error> {
        validate_year(year)?;

        let tracker_repo = TrackerDayRepository::new(self.db);
        let existing = tracker_repo.get_by_user_and_year(user_id, year).await?;

        let start = RamadanService::new(self.db, self.aladhan_client, self.ramadan_start_cache)
            .resolve_start_for_user(user_id, year)
            .await?;
        let dates = calendar_dates(start);

        if existing.is_empty() {
            let inserted = tracker_repo.insert_missing(user_id, year, dates).await?;
            info!(%user_id, year, %start, inserted, "Created tracker calendar");
        } else {
            let mut repaired = 0;

            for day in &existing {
                let Some(expected) = expected_date(start, day.day_number) else {
                    continue;
                };

                if day.day_number <= RAMADAN_DAYS && day.date != expected {
                    tracker_repo.update_date(day.id, expected).await?;
                    repaired += 1;
                }
            }

            let present: HashSet<i32> = existing.iter().map(|day| day.day_number).collect();
            let missing: Vec<_> = dates
                .into_iter()
                .filter(|(day_number, _)| !present.contains(day_number))
                .collect();
            let missing_count = missing.len();

            if missing_count > 0 {
                tracker_repo.insert_missing(user_id, year, missing).await?;
            }

            if repaired > 0 || missing_count > 0 {
                info!(
                    %user_id,
                    year,
                    %start,
                    repaired,
                    missing = missing_count,
                    "Reconciled tracker calendar"
                );
            } else {
                debug!(%user_id, year, "Tracker calendar up to date");
            }
        }

        let days = tracker_repo
            .get_by_user_and_year(user_id, year)
            .await?
            .into_iter()
            .filter(|day| (1..=RAMADAN_DAYS).contains(&day.day_number))
            .map(TrackerDayDto::from)
            .collect();

        Ok(days)
    }
}
