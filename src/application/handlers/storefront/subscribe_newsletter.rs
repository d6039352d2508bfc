//! SubscribeNewsletterHandler - Command handler for mailing-list signup.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::{NewsletterClient, SubscribeRequest};

/// Command to subscribe an address to the mailing list.
#[derive(Debug, Clone)]
pub struct SubscribeNewsletterCommand {
    pub email: String,
    pub first_name: Option<String>,
}

/// Handler for subscribing an address to the list.
pub struct SubscribeNewsletterHandler {
    newsletter: Arc<dyn NewsletterClient>,
}

impl SubscribeNewsletterHandler {
    pub fn new(newsletter: Arc<dyn NewsletterClient>) -> Self {
        Self { newsletter }
    }

    pub async fn handle(&self, cmd: SubscribeNewsletterCommand) -> Result<(), DomainError> {
        if cmd.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }
        if !cmd.email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol").into());
        }

        self.newsletter
            .subscribe(SubscribeRequest {
                email: cmd.email,
                first_name: cmd.first_name,
            })
            .await
            .map_err(|e| DomainError::new(ErrorCode::NewsletterProviderError, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NewsletterError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockNewsletterClient {
        subscribed: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl NewsletterClient for MockNewsletterClient {
        async fn subscribe(&self, request: SubscribeRequest) -> Result<(), NewsletterError> {
            if self.fail {
                return Err(NewsletterError::Unavailable("timeout".to_string()));
            }
            self.subscribed.lock().unwrap().push(request.email);
            Ok(())
        }
    }

    fn handler(fail: bool) -> (SubscribeNewsletterHandler, Arc<MockNewsletterClient>) {
        let client = Arc::new(MockNewsletterClient {
            subscribed: Mutex::new(Vec::new()),
            fail,
        });
        (SubscribeNewsletterHandler::new(client.clone()), client)
    }

    #[tokio::test]
    async fn valid_email_is_subscribed() {
        let (handler, client) = handler(false);
        handler
            .handle(SubscribeNewsletterCommand {
                email: "reader@example.com".to_string(),
                first_name: Some("Reader".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(client.subscribed.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_email_is_a_validation_failure() {
        let (handler, _) = handler(false);
        let err = handler
            .handle(SubscribeNewsletterCommand {
                email: "not-an-email".to_string(),
                first_name: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_newsletter_error() {
        let (handler, _) = handler(true);
        let err = handler
            .handle(SubscribeNewsletterCommand {
                email: "reader@example.com".to_string(),
                first_name: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NewsletterProviderError);
    }
}
