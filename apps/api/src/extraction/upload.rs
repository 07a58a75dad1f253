//! Upload orchestration: runs one batch of files through the extraction
//! collaborator, strictly one file at a time in submission order.
//!
//! Each success is stamped `completed` and prepended to the result store as
//! soon as it resolves, so earlier files are visible while later ones are
//! still in flight. A failed file adds nothing, raises one notice naming it,
//! and processing moves on to the next file.

use std::sync::Arc;

use anyhow::anyhow;
use bytes::Bytes;
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::extractor::ResumeExtractor;
use crate::models::resume::ParsedResume;
use crate::session::Session;

/// One file as received from the intake boundary.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub content: Bytes,
    pub mime_type: String,
    pub display_name: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub processed: usize,
    /// Ids of the records added by this batch, in processing order.
    pub added: Vec<Uuid>,
    /// Display names of the files that produced no record.
    pub failed: Vec<String>,
}

#[derive(Clone)]
pub struct UploadOrchestrator {
    session: Arc<Session>,
    extractor: Arc<dyn ResumeExtractor>,
}

impl UploadOrchestrator {
    pub fn new(session: Arc<Session>, extractor: Arc<dyn ResumeExtractor>) -> Self {
        Self { session, extractor }
    }

    /// Processes `files` in order. Fails only with `Conflict` when another
    /// batch already holds the busy flag; per-file failures are absorbed.
    ///
    /// The batch runs on its own task, so dropping the returned future
    /// (a client hanging up) does not stop it.
    pub async fn process_batch(&self, files: Vec<UploadedFile>) -> Result<BatchSummary, AppError> {
        let busy = self
            .session
            .try_begin_upload()
            .ok_or_else(|| AppError::Conflict("An upload batch is already processing".to_string()))?;

        let worker = self.clone();
        let batch = tokio::spawn(async move {
            let _busy = busy;
            worker.run_batch(files).await
        });

        batch
            .await
            .map_err(|e| AppError::Internal(anyhow!("Upload batch task failed: {e}")))
    }

    async fn run_batch(&self, files: Vec<UploadedFile>) -> BatchSummary {
        let total = files.len();
        info!("Processing upload batch of {total} file(s)");

        let mut summary = BatchSummary::default();
        for (index, file) in files.into_iter().enumerate() {
            summary.processed += 1;
            match self.process_file(&file, index + 1, total).await {
                Some(id) => summary.added.push(id),
                None => summary.failed.push(file.display_name),
            }
        }

        info!(
            "Upload batch finished: {}/{} parsed, {} failed",
            summary.added.len(),
            total,
            summary.failed.len()
        );
        summary
    }

    async fn process_file(&self, file: &UploadedFile, position: usize, total: usize) -> Option<Uuid> {
        let id = Uuid::new_v4();
        let name = &file.display_name;

        if !is_supported_mime_type(&file.mime_type) {
            warn!(
                "[{position}/{total}] Skipping {name}: unsupported type '{}'",
                file.mime_type
            );
            self.session.notices.write().await.warning(format!(
                "Failed to parse {name}. Only PDF files and images are supported."
            ));
            return None;
        }

        info!("[{position}/{total}] Parsing {name} ({})", file.mime_type);

        match self
            .extractor
            .parse_resume(&file.content, &file.mime_type)
            .await
        {
            Ok(result) => {
                let record = ParsedResume::completed(id, name.clone(), result);
                self.session.resumes.write().await.insert_front(record);
                info!("[{position}/{total}] Parsed {name} as {id}");
                Some(id)
            }
            Err(e) => {
                error!("[{position}/{total}] Error parsing resume {name}: {e}");
                self.session.notices.write().await.error(format!(
                    "Failed to parse {name}. Ensure it's a clear PDF or image."
                ));
                None
            }
        }
    }
}

/// PDFs and any `image/*` type are accepted.
pub fn is_supported_mime_type(mime_type: &str) -> bool {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/pdf" || essence.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::models::resume::{fixtures::processing_result, ResumeProcessingResult};

    /// Scripted extractor: file content is the candidate's name, and any
    /// name listed in `fail` errors. Records what it observed on each call.
    struct ScriptedExtractor {
        session: Arc<Session>,
        fail: HashSet<String>,
        calls: Mutex<Vec<CallObservation>>,
    }

    #[derive(Debug, Clone)]
    struct CallObservation {
        name: String,
        busy: bool,
        store_len: usize,
    }

    impl ScriptedExtractor {
        fn new(session: Arc<Session>, fail: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                session,
                fail: fail.iter().map(|s| s.to_string()).collect(),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<CallObservation> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResumeExtractor for ScriptedExtractor {
        async fn parse_resume(
            &self,
            file_content: &[u8],
            _mime_type: &str,
        ) -> Result<ResumeProcessingResult, AppError> {
            let name = String::from_utf8(file_content.to_vec()).unwrap();
            let store_len = self.session.resumes.read().await.len();
            self.calls.lock().unwrap().push(CallObservation {
                name: name.clone(),
                busy: self.session.is_uploading(),
                store_len,
            });
            tokio::time::sleep(Duration::from_millis(100)).await;

            if self.fail.contains(&name) {
                Err(AppError::Llm(format!("could not read {name}")))
            } else {
                Ok(processing_result(&name))
            }
        }
    }

    fn pdf(name: &str) -> UploadedFile {
        UploadedFile {
            content: Bytes::from(name.to_string()),
            mime_type: "application/pdf".to_string(),
            display_name: format!("{name}.pdf"),
        }
    }

    async fn names_in_store(session: &Session) -> Vec<String> {
        session
            .resumes
            .read()
            .await
            .all()
            .map(|r| r.contact_info.full_name.clone())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_successes_prepend_in_processing_order() {
        let session = Arc::new(Session::new());
        session.resumes.write().await.insert_front(ParsedResume::completed(
            Uuid::new_v4(),
            "old.pdf",
            processing_result("Old"),
        ));
        let extractor = ScriptedExtractor::new(session.clone(), &[]);

        let summary = UploadOrchestrator::new(session.clone(), extractor.clone())
            .process_batch(vec![pdf("A"), pdf("B"), pdf("C")])
            .await
            .unwrap();

        assert_eq!(summary.processed, 3);
        assert_eq!(summary.added.len(), 3);
        assert!(summary.failed.is_empty());
        assert_eq!(names_in_store(&session).await, vec!["C", "B", "A", "Old"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_file_is_skipped_and_batch_continues() {
        let session = Arc::new(Session::new());
        let extractor = ScriptedExtractor::new(session.clone(), &["B"]);

        let summary = UploadOrchestrator::new(session.clone(), extractor.clone())
            .process_batch(vec![pdf("A"), pdf("B"), pdf("C"), pdf("D")])
            .await
            .unwrap();

        assert_eq!(summary.added.len(), 3);
        assert_eq!(summary.failed, vec!["B.pdf"]);
        assert_eq!(names_in_store(&session).await, vec!["D", "C", "A"]);

        let called: Vec<_> = extractor.calls().into_iter().map(|c| c.name).collect();
        assert_eq!(called, vec!["A", "B", "C", "D"]);

        let notices = session.notices.read().await.list();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message.contains("B.pdf"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_success_is_visible_before_next_file_starts() {
        let session = Arc::new(Session::new());
        let extractor = ScriptedExtractor::new(session.clone(), &["B"]);

        UploadOrchestrator::new(session.clone(), extractor.clone())
            .process_batch(vec![pdf("A"), pdf("B"), pdf("C")])
            .await
            .unwrap();

        let seen: Vec<_> = extractor.calls().into_iter().map(|c| c.store_len).collect();
        assert_eq!(seen, vec![0, 1, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_flag_spans_whole_batch() {
        let session = Arc::new(Session::new());
        let extractor = ScriptedExtractor::new(session.clone(), &["A", "C"]);
        assert!(!session.is_uploading());

        UploadOrchestrator::new(session.clone(), extractor.clone())
            .process_batch(vec![pdf("A"), pdf("B"), pdf("C")])
            .await
            .unwrap();

        assert!(extractor.calls().iter().all(|c| c.busy));
        assert!(!session.is_uploading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_batch_while_busy_is_rejected() {
        let session = Arc::new(Session::new());
        let extractor = ScriptedExtractor::new(session.clone(), &[]);
        let _held = session.try_begin_upload().unwrap();

        let result = UploadOrchestrator::new(session.clone(), extractor.clone())
            .process_batch(vec![pdf("A")])
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert!(extractor.calls().is_empty());
        assert!(session.resumes.read().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsupported_type_fails_without_calling_extractor() {
        let session = Arc::new(Session::new());
        let extractor = ScriptedExtractor::new(session.clone(), &[]);
        let doc = UploadedFile {
            content: Bytes::from_static(b"Z"),
            mime_type: "application/msword".to_string(),
            display_name: "cv.doc".to_string(),
        };

        let summary = UploadOrchestrator::new(session.clone(), extractor.clone())
            .process_batch(vec![doc, pdf("A")])
            .await
            .unwrap();

        assert_eq!(summary.failed, vec!["cv.doc"]);
        assert_eq!(summary.added.len(), 1);
        assert_eq!(extractor.calls().len(), 1);
        assert!(session.notices.read().await.list()[0].message.contains("cv.doc"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_batch_is_ok_and_releases_flag() {
        let session = Arc::new(Session::new());
        let extractor = ScriptedExtractor::new(session.clone(), &[]);

        let summary = UploadOrchestrator::new(session.clone(), extractor.clone())
            .process_batch(Vec::new())
            .await
            .unwrap();

        assert_eq!(summary.processed, 0);
        assert!(!session.is_uploading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_caller_does_not_cancel_batch() {
        let session = Arc::new(Session::new());
        let extractor = ScriptedExtractor::new(session.clone(), &[]);
        let orchestrator = UploadOrchestrator::new(session.clone(), extractor.clone());

        // Give up partway through the second file.
        let abandoned = tokio::time::timeout(
            Duration::from_millis(150),
            orchestrator.process_batch(vec![pdf("A"), pdf("B"), pdf("C")]),
        )
        .await;
        assert!(abandoned.is_err());
        assert!(session.is_uploading());

        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(extractor.calls().len(), 3);
        assert_eq!(names_in_store(&session).await, vec!["C", "B", "A"]);
        assert!(!session.is_uploading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_generated_ids_are_distinct() {
        let session = Arc::new(Session::new());
        let extractor = ScriptedExtractor::new(session.clone(), &[]);

        let files: Vec<_> = (0..20).map(|i| pdf(&format!("C{i}"))).collect();
        let summary = UploadOrchestrator::new(session.clone(), extractor.clone())
            .process_batch(files)
            .await
            .unwrap();

        let unique: HashSet<_> = summary.added.iter().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn test_supported_mime_types() {
        assert!(is_supported_mime_type("application/pdf"));
        assert!(is_supported_mime_type("image/png"));
        assert!(is_supported_mime_type("IMAGE/JPEG"));
        assert!(is_supported_mime_type("application/pdf; charset=binary"));
        assert!(!is_supported_mime_type("text/plain"));
        assert!(!is_supported_mime_type(""));
    }
}
