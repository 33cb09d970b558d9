use anyhow::Result;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::models::visitor::{HOMEPAGE_SECTION, Visitor};
use crate::utils::user_agent::parse_user_agent;

/// Repeat visits from the same IP inside this window are not recorded again.
pub const DEDUP_WINDOW_MINUTES: i64 = 30;

/// Outcome of a single tracking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackDecision {
    Skipped,
    Recorded,
}

/// Append-only store for homepage visits, with time-windowed dedup per IP.
#[derive(Clone)]
pub struct VisitorStore {
    collection: Collection<Visitor>,
}

impl VisitorStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Visitor>("visitors"),
        }
    }

    /// Decide whether this request produces a new visitor record, and insert
    /// it if so. At most one record per call; skips are successes.
    ///
    /// The dedup check and the insert are separate operations, so two
    /// simultaneous requests from one IP can both pass the check. Dedup is
    /// best-effort by design.
    pub async fn record_visit(
        &self,
        ip: &str,
        user_agent: Option<&str>,
        route_path: &str,
        tracked_path: &str,
    ) -> Result<TrackDecision> {
        if is_excluded_path(route_path) {
            return Ok(TrackDecision::Skipped);
        }

        // Only homepage views are recorded.
        if tracked_path != HOMEPAGE_SECTION {
            return Ok(TrackDecision::Skipped);
        }

        let cutoff = chrono::Utc::now().timestamp_millis() - DEDUP_WINDOW_MINUTES * 60 * 1000;
        let existing = self
            .collection
            .find_one(doc! {
                "ip": ip,
                "section": HOMEPAGE_SECTION,
                "timestamp": { "$gt": cutoff }
            })
            .await?;

        if existing.is_some() {
            log::debug!("skipping duplicate homepage visit for {}", ip);
            return Ok(TrackDecision::Skipped);
        }

        let visitor = Visitor::new(ip.to_string(), parse_user_agent(user_agent));
        self.collection.insert_one(&visitor).await?;
        log::info!("homepage visit tracked: {}", ip);

        Ok(TrackDecision::Recorded)
    }

    pub async fn newest_first(&self) -> Result<Vec<Visitor>> {
        let visitors = self
            .collection
            .find(doc! {})
            .sort(doc! { "timestamp": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(visitors)
    }
}

/// Routes that never produce a visitor record, whatever path they report.
pub fn is_excluded_path(path: &str) -> bool {
    path.starts_with("/health")
        || path.contains("favicon")
        || path.contains("static")
        || path.contains("admin")
}
