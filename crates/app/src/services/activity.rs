use fleet_core::ActivityPage;
use fleet_db::Db;

use crate::config::ActivityParams;
use crate::error::Result;
use crate::services::{SharedConfig, open_db};

/// Page size of the dashboard activity feed.
pub const DEFAULT_PER_PAGE: u32 = 4;
const MAX_PER_PAGE: u32 = 100;

#[derive(Clone)]
pub struct ActivityService {
    config: SharedConfig,
}

impl ActivityService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn list(&self, params: &ActivityParams) -> Result<ActivityPage> {
        let page = params.page.unwrap_or(1).max(1);
        let per_page = params
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        let db = self.db()?;
        let total = db.count_activity()?;
        let logs = db.list_activity(page, per_page)?;
        Ok(ActivityPage {
            total,
            page,
            per_page,
            logs,
        })
    }
}
