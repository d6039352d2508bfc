//! ReorderEssaysHandler - Command handler for the admin essay reorder.

use std::sync::Arc;

use futures::future::join_all;

use crate::domain::foundation::{DomainError, ErrorCode, EssayId};
use crate::ports::EssayRepository;

/// One item of the bulk reorder request.
#[derive(Debug, Clone)]
pub struct EssayOrderItem {
    pub id: EssayId,
    pub display_order: i32,
}

/// Command to rewrite the curated essay order.
#[derive(Debug, Clone)]
pub struct ReorderEssaysCommand {
    pub items: Vec<EssayOrderItem>,
}

/// A single item that could not be updated.
#[derive(Debug, Clone)]
pub struct ReorderFailure {
    pub id: EssayId,
    pub error: String,
}

/// Aggregate outcome of a bulk reorder.
///
/// Best-effort semantics: successes are persisted even when other items
/// fail, and the failures are reported per item rather than rolled back.
#[derive(Debug, Clone)]
pub struct ReorderOutcome {
    pub updated: Vec<EssayId>,
    pub failed: Vec<ReorderFailure>,
}

impl ReorderOutcome {
    /// Returns true if every item was persisted.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Handler for the bulk `display_order` update.
///
/// Issues one independent update per item concurrently and aggregates
/// the per-item outcomes.
pub struct ReorderEssaysHandler {
    essays: Arc<dyn EssayRepository>,
}

impl ReorderEssaysHandler {
    pub fn new(essays: Arc<dyn EssayRepository>) -> Self {
        Self { essays }
    }

    pub async fn handle(&self, cmd: ReorderEssaysCommand) -> Result<ReorderOutcome, DomainError> {
        if cmd.items.is_empty() {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Reorder request must contain at least one essay",
            ));
        }
        if let Some(item) = cmd.items.iter().find(|i| i.display_order < 0) {
            return Err(DomainError::validation(
                "display_order",
                format!("display_order must be non-negative, got {}", item.display_order),
            ));
        }

        let updates = cmd.items.iter().map(|item| {
            let essays = self.essays.clone();
            async move {
                match essays.set_display_order(&item.id, item.display_order).await {
                    Ok(()) => Ok(item.id),
                    Err(e) => Err(ReorderFailure {
                        id: item.id,
                        error: e.to_string(),
                    }),
                }
            }
        });

        let mut outcome = ReorderOutcome {
            updated: Vec::new(),
            failed: Vec::new(),
        };
        for result in join_all(updates).await {
            match result {
                Ok(id) => outcome.updated.push(id),
                Err(failure) => outcome.failed.push(failure),
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Repository that knows a fixed set of essay ids.
    struct MockEssayRepository {
        known: Vec<EssayId>,
        applied: Mutex<HashMap<EssayId, i32>>,
    }

    impl MockEssayRepository {
        fn with_ids(known: Vec<EssayId>) -> Self {
            Self {
                known,
                applied: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl EssayRepository for MockEssayRepository {
        async fn set_display_order(
            &self,
            id: &EssayId,
            display_order: i32,
        ) -> Result<(), DomainError> {
            if !self.known.contains(id) {
                return Err(DomainError::new(ErrorCode::EssayNotFound, "Essay not found"));
            }
            self.applied.lock().unwrap().insert(*id, display_order);
            Ok(())
        }
    }

    fn item(id: EssayId, display_order: i32) -> EssayOrderItem {
        EssayOrderItem { id, display_order }
    }

    #[tokio::test]
    async fn all_valid_items_are_persisted() {
        let ids = vec![EssayId::new(), EssayId::new(), EssayId::new()];
        let repo = Arc::new(MockEssayRepository::with_ids(ids.clone()));
        let handler = ReorderEssaysHandler::new(repo.clone());

        let outcome = handler
            .handle(ReorderEssaysCommand {
                items: ids.iter().enumerate().map(|(i, id)| item(*id, i as i32)).collect(),
            })
            .await
            .unwrap();

        assert!(outcome.is_complete());
        assert_eq!(outcome.updated.len(), 3);
        assert_eq!(repo.applied.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn invalid_id_among_valid_ones_reports_partial_failure() {
        let known = vec![EssayId::new(), EssayId::new()];
        let unknown = EssayId::new();
        let repo = Arc::new(MockEssayRepository::with_ids(known.clone()));
        let handler = ReorderEssaysHandler::new(repo.clone());

        let outcome = handler
            .handle(ReorderEssaysCommand {
                items: vec![item(known[0], 0), item(unknown, 1), item(known[1], 2)],
            })
            .await
            .unwrap();

        assert!(!outcome.is_complete());
        assert_eq!(outcome.updated.len(), 2);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].id, unknown);
        // The valid ones were persisted despite the failure.
        assert_eq!(repo.applied.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_request_is_a_validation_failure() {
        let handler = ReorderEssaysHandler::new(Arc::new(MockEssayRepository::with_ids(vec![])));
        let err = handler
            .handle(ReorderEssaysCommand { items: vec![] })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn negative_display_order_is_a_validation_failure() {
        let id = EssayId::new();
        let handler =
            ReorderEssaysHandler::new(Arc::new(MockEssayRepository::with_ids(vec![id])));
        let err = handler
            .handle(ReorderEssaysCommand {
                items: vec![item(id, -5)],
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
