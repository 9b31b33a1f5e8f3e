use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{Client, NewClient};
use crate::domain::types::{Email, PersonalId};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Client details as entered by an operator.
pub struct ClientForm {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    /// Eleven digit personal identification number.
    pub personal_id: String,
    #[validate(length(min = 1, max = 32))]
    pub mobile_number: String,
    #[serde(default)]
    pub profile_photo: String,
}

impl ClientForm {
    fn value_objects(&self) -> Result<(Email, PersonalId), FormError> {
        self.validate()?;
        let email = Email::new(self.email.as_str()).map_err(|_| FormError::InvalidEmail)?;
        let personal_id =
            PersonalId::new(self.personal_id.as_str()).map_err(|_| FormError::InvalidPersonalId)?;
        Ok((email, personal_id))
    }

    /// Validates the form and builds the client to be inserted.
    pub fn into_new_client(self) -> Result<NewClient, FormError> {
        let (email, personal_id) = self.value_objects()?;
        Ok(NewClient::new(
            self.first_name,
            self.last_name,
            email,
            personal_id,
            self.mobile_number,
            self.profile_photo,
        ))
    }

    /// Validates the form and overwrites the mutable fields of `client`.
    ///
    /// `client` is left untouched when validation fails.
    pub fn apply_to(self, client: &mut Client) -> Result<(), FormError> {
        let (email, personal_id) = self.value_objects()?;
        client.first_name = self.first_name.trim().to_string();
        client.last_name = self.last_name.trim().to_string();
        client.email = email;
        client.personal_id = personal_id;
        client.mobile_number = self.mobile_number.trim().to_string();
        client.profile_photo = self.profile_photo.trim().to_string();
        Ok(())
    }
}
