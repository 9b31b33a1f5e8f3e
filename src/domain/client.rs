use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, Email, PersonalId};

/// Client record as stored by the back-office.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub personal_id: PersonalId,
    pub mobile_number: String,
    /// Path or blob reference of the profile photo.
    pub profile_photo: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Client data that has not been persisted yet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub personal_id: PersonalId,
    pub mobile_number: String,
    pub profile_photo: String,
}

impl NewClient {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: Email,
        personal_id: PersonalId,
        mobile_number: impl Into<String>,
        profile_photo: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            email,
            personal_id,
            mobile_number: mobile_number.into().trim().to_string(),
            profile_photo: profile_photo.into().trim().to_string(),
        }
    }
}

impl Client {
    /// Full display name, `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_trims_free_text_fields() {
        let client = NewClient::new(
            " John ",
            "Doe\n",
            Email::new("john.doe@test.com").unwrap(),
            PersonalId::new("12345678901").unwrap(),
            " 12345",
            "photos/john.png ",
        );

        assert_eq!(client.first_name, "John");
        assert_eq!(client.last_name, "Doe");
        assert_eq!(client.mobile_number, "12345");
        assert_eq!(client.profile_photo, "photos/john.png");
    }
}
