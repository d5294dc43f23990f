//! Request dispatcher.
//!
//! Turns one [`ContactEvent`] into exactly one repository call and renders
//! the outcome. Both the Lambda runtime and the local HTTP server go through
//! [`dispatch`].

mod contacts;
mod error;

use contacts_core::dispatch::{
    parse_operation, ContactError, ContactEvent, ContactResponse, Operation,
};
use contacts_core::storage::ContactRepository;

pub use contacts::{create_contact, delete_contact, list_contacts, update_contact};
pub use error::error_response;

/// Routes the event to its handler and always produces a response.
pub async fn dispatch(repository: &dyn ContactRepository, event: &ContactEvent) -> ContactResponse {
    match run(repository, event).await {
        Ok(response) => response,
        Err(error) => error_response(&error),
    }
}

async fn run(
    repository: &dyn ContactRepository,
    event: &ContactEvent,
) -> Result<ContactResponse, ContactError> {
    match parse_operation(event)? {
        Operation::Create(contact) => create_contact(repository, &contact).await,
        Operation::List => list_contacts(repository).await,
        Operation::Delete { phone_number } => delete_contact(repository, &phone_number).await,
        Operation::Update(contact) => update_contact(repository, &contact).await,
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use contacts_core::contact::Contact;
    use contacts_core::storage::{RepositoryError, Result};

    use super::*;
    use crate::storage::InMemoryRepository;

    /// Repository whose every call fails like an unreachable table.
    struct FailingRepository;

    #[async_trait]
    impl ContactRepository for FailingRepository {
        async fn put_contact(&self, _contact: &Contact) -> Result<()> {
            Err(unavailable())
        }

        async fn list_contacts(&self) -> Result<Vec<Contact>> {
            Err(unavailable())
        }

        async fn delete_contact(&self, _phone_number: &str) -> Result<()> {
            Err(unavailable())
        }

        async fn update_contact(&self, _contact: &Contact) -> Result<Contact> {
            Err(unavailable())
        }
    }

    fn unavailable() -> RepositoryError {
        RepositoryError::TableNotFound("Requested resource not found".to_string())
    }

    fn decode_message(response: &ContactResponse) -> String {
        serde_json::from_str(&response.body).unwrap()
    }

    fn post(body: &str) -> ContactEvent {
        ContactEvent::new("POST").with_body(body)
    }

    fn put(body: &str) -> ContactEvent {
        ContactEvent::new("PUT").with_body(body)
    }

    fn delete(phone_number: &str) -> ContactEvent {
        ContactEvent::new("DELETE").with_query_param("phone_number", phone_number)
    }

    const ADA: &str = r#"{"firstName":"Ada","lastName":"Lovelace","phoneNumber":"555-0100"}"#;

    #[tokio::test]
    async fn test_full_lifecycle() {
        let repo = InMemoryRepository::new();

        let response = dispatch(&repo, &post(ADA)).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(
            decode_message(&response),
            "Contact added: Ada Lovelace 555-0100"
        );

        let response = dispatch(&repo, &ContactEvent::new("GET")).await;
        assert_eq!(response.status_code, 200);
        let contacts: Vec<Contact> = serde_json::from_str(&response.body).unwrap();
        assert_eq!(contacts, vec![Contact::new("Ada", "Lovelace", "555-0100")]);

        let response = dispatch(
            &repo,
            &put(r#"{"firstName":"Ada","lastName":"King","phoneNumber":"555-0100"}"#),
        )
        .await;
        assert_eq!(response.status_code, 200);
        assert_eq!(decode_message(&response), "Contact updated: Ada King 555-0100");

        let response = dispatch(&repo, &delete("555-0100")).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(
            decode_message(&response),
            "Contact with phone number 555-0100 deleted."
        );

        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_list_returns_raw_records() {
        let repo = InMemoryRepository::new();
        dispatch(&repo, &post(ADA)).await;

        let response = dispatch(&repo, &ContactEvent::new("GET")).await;
        let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "phoneNumber": "555-0100",
                "firstName": "Ada",
                "lastName": "Lovelace",
            }])
        );
    }

    #[tokio::test]
    async fn test_list_empty_table() {
        let repo = InMemoryRepository::new();
        let response = dispatch(&repo, &ContactEvent::new("GET")).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "[]");
    }

    #[tokio::test]
    async fn test_create_twice_overwrites() {
        let repo = InMemoryRepository::new();
        dispatch(&repo, &post(ADA)).await;
        dispatch(
            &repo,
            &post(r#"{"firstName":"Grace","lastName":"Hopper","phoneNumber":"555-0100"}"#),
        )
        .await;

        let contacts = repo.list_contacts().await.unwrap();
        assert_eq!(contacts, vec![Contact::new("Grace", "Hopper", "555-0100")]);
    }

    #[tokio::test]
    async fn test_update_nonexistent_creates() {
        let repo = InMemoryRepository::new();
        let response = dispatch(
            &repo,
            &put(r#"{"firstName":"Ada","lastName":"King","phoneNumber":"555-0199"}"#),
        )
        .await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            repo.list_contacts().await.unwrap(),
            vec![Contact::new("Ada", "King", "555-0199")]
        );
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_ok() {
        let repo = InMemoryRepository::new();
        let response = dispatch(&repo, &delete("000-0000")).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            decode_message(&response),
            "Contact with phone number 000-0000 deleted."
        );
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_without_mutation() {
        let repo = InMemoryRepository::new();
        let bodies = [
            r#"{"firstName":"","lastName":"X","phoneNumber":"1"}"#,
            r#"{"lastName":"X","phoneNumber":"1"}"#,
            r#"{"firstName":"A","phoneNumber":"1"}"#,
            r#"{"firstName":"A","lastName":"X","phoneNumber":""}"#,
        ];

        for body in bodies {
            for event in [post(body), put(body)] {
                let response = dispatch(&repo, &event).await;
                assert_eq!(response.status_code, 400);
                assert_eq!(
                    decode_message(&response),
                    "Missing required fields: firstName, lastName, or phoneNumber"
                );
            }
        }

        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let repo = InMemoryRepository::new();
        let response = dispatch(&repo, &ContactEvent::new("PATCH").with_body(ADA)).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(decode_message(&response), "Unsupported HTTP method");
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let repo = InMemoryRepository::new();
        let response = dispatch(&repo, &post("{not json")).await;

        assert_eq!(response.status_code, 400);
        assert!(decode_message(&response).starts_with("Invalid request body: "));
    }

    #[tokio::test]
    async fn test_delete_without_phone_number() {
        let repo = InMemoryRepository::new();
        let response = dispatch(&repo, &ContactEvent::new("DELETE")).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            decode_message(&response),
            "Missing required query parameter: phone_number"
        );
    }

    #[tokio::test]
    async fn test_store_failures_map_to_500_with_message() {
        let repo = FailingRepository;
        let cases = [
            (post(ADA), "Error adding contact: "),
            (ContactEvent::new("GET"), "Error fetching contacts: "),
            (delete("555-0100"), "Error deleting contact: "),
            (put(ADA), "Error updating contact: "),
        ];

        for (event, prefix) in cases {
            let response = dispatch(&repo, &event).await;
            assert_eq!(response.status_code, 500);

            assert_eq!(
                decode_message(&response),
                format!("{prefix}Requested resource not found")
            );
        }
    }

    #[tokio::test]
    async fn test_validation_runs_before_store() {
        let response = dispatch(&FailingRepository, &post(r#"{"firstName":"A"}"#)).await;
        assert_eq!(response.status_code, 400);
    }
}
