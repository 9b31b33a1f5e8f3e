use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{Client as DomainClient, NewClient as DomainNewClient};
use crate::domain::types::{ClientId, Email, PersonalId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub personal_id: String,
    pub mobile_number: String,
    pub profile_photo: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub personal_id: &'a str,
    pub mobile_number: &'a str,
    pub profile_photo: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
/// Data used when updating a [`Client`] record.
pub struct UpdateClient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub personal_id: &'a str,
    pub mobile_number: &'a str,
    pub profile_photo: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::new(client.id)?,
            first_name: client.first_name,
            last_name: client.last_name,
            email: Email::new(client.email)?,
            personal_id: PersonalId::new(client.personal_id)?,
            mobile_number: client.mobile_number,
            profile_photo: client.profile_photo,
            created_at: client.created_at,
            updated_at: client.updated_at,
        })
    }
}

impl<'a> NewClient<'a> {
    /// Borrows the domain payload, stamping both timestamps with `now`.
    pub fn from_domain(client: &'a DomainNewClient, now: NaiveDateTime) -> Self {
        Self {
            first_name: client.first_name.as_str(),
            last_name: client.last_name.as_str(),
            email: client.email.as_str(),
            personal_id: client.personal_id.as_str(),
            mobile_number: client.mobile_number.as_str(),
            profile_photo: client.profile_photo.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> UpdateClient<'a> {
    /// Borrows every mutable field of the domain client.
    pub fn from_domain(client: &'a DomainClient, now: NaiveDateTime) -> Self {
        Self {
            first_name: client.first_name.as_str(),
            last_name: client.last_name.as_str(),
            email: client.email.as_str(),
            personal_id: client.personal_id.as_str(),
            mobile_number: client.mobile_number.as_str(),
            profile_photo: client.profile_photo.as_str(),
            updated_at: now,
        }
    }
}
