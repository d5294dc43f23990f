//! Wire shapes exchanged with the API gateway.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// The subset of an API Gateway proxy event the dispatcher reads.
///
/// Any other field in the event is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEvent {
    /// Empty when the gateway omitted it or sent null; rejected as an
    /// unsupported method.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl ContactEvent {
    /// Create an event with just a method tag.
    pub fn new(http_method: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            body: None,
            query_string_parameters: None,
        }
    }

    /// Set the raw request body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Add a single query string parameter.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a query string parameter by name.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Status code plus JSON-encoded body, as API Gateway expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub status_code: u16,
    pub body: String,
}

impl ContactResponse {
    /// A response whose body is `value` encoded as JSON.
    pub fn json<T: Serialize + ?Sized>(
        status_code: u16,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code,
            body: serde_json::to_string(value)?,
        })
    }

    /// A response whose body is a JSON string literal.
    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: serde_json::Value::String(message.into()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes_gateway_shape() {
        let event: ContactEvent = serde_json::from_str(
            r#"{
                "resource": "/contacts",
                "httpMethod": "DELETE",
                "headers": {"Accept": "*/*"},
                "queryStringParameters": {"phone_number": "555-0100"},
                "body": null,
                "isBase64Encoded": false
            }"#,
        )
        .unwrap();

        assert_eq!(event.http_method, "DELETE");
        assert_eq!(event.body, None);
        assert_eq!(event.query_param("phone_number"), Some("555-0100"));
    }

    #[test]
    fn test_event_null_query_parameters() {
        let event: ContactEvent =
            serde_json::from_str(r#"{"httpMethod":"GET","queryStringParameters":null}"#).unwrap();

        assert_eq!(event.query_string_parameters, None);
        assert_eq!(event.query_param("phone_number"), None);
    }

    #[test]
    fn test_event_missing_method_defaults_to_empty() {
        let event: ContactEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(event.http_method, "");
    }

    #[test]
    fn test_event_null_method_defaults_to_empty() {
        let event: ContactEvent =
            serde_json::from_value(serde_json::json!({"httpMethod": null, "body": null})).unwrap();
        assert_eq!(event.http_method, "");
    }

    #[test]
    fn test_event_builder() {
        let event = ContactEvent::new("DELETE").with_query_param("phone_number", "1");
        assert_eq!(event.query_param("phone_number"), Some("1"));
        assert_eq!(event.query_param("other"), None);
    }

    #[test]
    fn test_response_serializes_status_code_in_camel_case() {
        let response = ContactResponse::message(200, "ok");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({"statusCode": 200, "body": "\"ok\""}));
    }

    #[test]
    fn test_message_body_is_json_string() {
        let response = ContactResponse::message(400, "Unsupported HTTP method");
        assert_eq!(response.body, "\"Unsupported HTTP method\"");

        let decoded: String = serde_json::from_str(&response.body).unwrap();
        assert_eq!(decoded, "Unsupported HTTP method");
    }

    #[test]
    fn test_json_body_array() {
        let response = ContactResponse::json(200, &["a", "b"]).unwrap();
        assert_eq!(response.body, r#"["a","b"]"#);
    }
}
