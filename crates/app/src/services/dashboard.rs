use chrono::NaiveDate;
use fleet_core::{
    BucketReport, CalendarDay, DashboardStats, DateWindow, Granularity, MaintenanceEvent,
};
use fleet_db::{Db, MaintenanceFilter, SortOrder};
use tracing::warn;

use crate::error::Result;
use crate::services::{SharedConfig, open_db};
use crate::util::time::{today_in, window_range};

#[derive(Clone)]
pub struct DashboardService {
    config: SharedConfig,
}

impl DashboardService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn stats(&self) -> Result<DashboardStats> {
        Ok(self.db()?.dashboard_stats()?)
    }

    /// Event counts per bucket for the window around `reference` (today when absent).
    pub fn maintenance_chart(
        &self,
        granularity: Granularity,
        reference: Option<NaiveDate>,
    ) -> Result<BucketReport> {
        let tz = &self.config.utc_offset;
        let reference = reference.unwrap_or_else(|| today_in(tz));
        let window = granularity.window(reference);
        let events = self.load_window(&window)?;
        let report = self
            .config
            .aggregator()
            .bucketize(&events, reference, granularity);
        if report.skipped > 0 {
            warn!(
                skipped = report.skipped,
                "skipped maintenance events with unreadable start dates"
            );
        }
        Ok(report)
    }

    /// One entry per day of the month containing `month` (current month when absent).
    pub fn calendar(&self, month: Option<NaiveDate>) -> Result<Vec<CalendarDay>> {
        let anchor = month.unwrap_or_else(|| today_in(&self.config.utc_offset));
        let window = Granularity::Month.window(anchor);
        let events = self.load_window(&window)?;
        Ok(self.config.aggregator().month_grid(&events, anchor))
    }

    fn load_window(&self, window: &DateWindow) -> Result<Vec<MaintenanceEvent>> {
        let range = window_range(window, &self.config.utc_offset)?;
        let filter = MaintenanceFilter {
            start: Some(range.start),
            end: Some(range.end),
            order: SortOrder::Ascending,
            ..MaintenanceFilter::default()
        };
        Ok(self.db()?.list_maintenance_in_range(&filter)?)
    }
}
