//! Person-related DTOs for API requests and responses.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::Person;
use crate::services::RegisterPerson;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for registering a person.
///
/// Missing fields decode as empty strings; no further validation is applied.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterPersonRequest {
    pub email: String,
    pub login: String,
    pub password: String,
}

impl RegisterPersonRequest {
    /// Converts the request DTO into the service input.
    pub fn into_register_person(self) -> RegisterPerson {
        RegisterPerson {
            email: self.email,
            login: self.login,
            password: self.password,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Public projection of a person.
///
/// `image` is base64 text, or `null` when no image is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonResponse {
    pub login: String,
    #[serde(serialize_with = "serialize_image")]
    pub image: Option<Vec<u8>>,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            login: person.login,
            image: person.image,
        }
    }
}

fn serialize_image<S: Serializer>(image: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
    match image {
        Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
        None => serializer.serialize_none(),
    }
}
