//! Session state shared by every handler: the result collection, the held
//! report, pending notices, and the two busy flags.
//!
//! Locks are only taken for point-in-time reads and mutations. No guard is
//! ever held across a collaborator call. Busy permits are owned so they can
//! travel into the spawned task that runs the work.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, RwLock, Semaphore};

use crate::models::report::ProjectReportData;
use crate::notices::NoticeBoard;
use crate::store::ResultStore;

pub struct Session {
    pub resumes: RwLock<ResultStore>,
    pub report: RwLock<Option<ProjectReportData>>,
    pub notices: RwLock<NoticeBoard>,
    upload_gate: Arc<Semaphore>,
    report_gate: Arc<Semaphore>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            resumes: RwLock::new(ResultStore::new()),
            report: RwLock::new(None),
            notices: RwLock::new(NoticeBoard::default()),
            upload_gate: Arc::new(Semaphore::new(1)),
            report_gate: Arc::new(Semaphore::new(1)),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the batch-busy flag. `None` while another batch is running.
    /// The flag is released when the permit drops.
    pub fn try_begin_upload(&self) -> Option<OwnedSemaphorePermit> {
        Arc::clone(&self.upload_gate).try_acquire_owned().ok()
    }

    /// Claims the report-busy flag. `None` while a report call is in flight.
    pub fn try_begin_report(&self) -> Option<OwnedSemaphorePermit> {
        Arc::clone(&self.report_gate).try_acquire_owned().ok()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_gate.available_permits() == 0
    }

    pub fn is_generating_report(&self) -> bool {
        self.report_gate.available_permits() == 0
    }
}
