use std::str::FromStr;

use crate::contact::ValidationError;

/// HTTP methods the dispatcher routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Get,
    Put,
    Delete,
}

/// Matches the tag exactly; API Gateway always sends upper case.
impl FromStr for Method {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POST" => Ok(Method::Post),
            "GET" => Ok(Method::Get),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => Err(ValidationError::UnsupportedMethod(other.to_string())),
        }
    }
}
