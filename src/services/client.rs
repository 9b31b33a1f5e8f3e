use serde::Deserialize;

use crate::domain::client::Client;
use crate::domain::search::ClientSearchParameters;
use crate::domain::types::ClientId;
use crate::forms::client::ClientForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Search input as received from an operator.
#[derive(Debug, Default, Deserialize)]
pub struct ClientSearchParams {
    /// Substring expected in the first name.
    pub first_name: Option<String>,
    /// Substring expected in the last name.
    pub last_name: Option<String>,
    /// 1-based page number, defaults to the first page.
    pub page: Option<usize>,
    /// Items per page, defaults to [`DEFAULT_ITEMS_PER_PAGE`].
    pub page_size: Option<usize>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Lists a page of clients matching the given name filters.
pub fn search_clients<R>(repo: &R, params: ClientSearchParams) -> ServiceResult<Paginated<Client>>
where
    R: ClientReader + ?Sized,
{
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(DEFAULT_ITEMS_PER_PAGE);

    let mut query = ClientListQuery::new().paginate(page, page_size);
    if let Some(term) = non_blank(params.first_name) {
        query = query.first_name(term);
    }
    if let Some(term) = non_blank(params.last_name) {
        query = query.last_name(term);
    }

    let (total, clients) = repo.list_clients(query).map_err(|err| {
        log::error!("Failed to list clients: {err}");
        ServiceError::from(err)
    })?;

    Ok(Paginated::new(clients, page, page_size, total))
}

/// Fetches a client by its identifier.
pub fn get_client<R>(repo: &R, client_id: ClientId) -> ServiceResult<Option<Client>>
where
    R: ClientReader + ?Sized,
{
    repo.get_client_by_id(client_id).map_err(ServiceError::from)
}

/// Validates the form and persists a new client record.
pub fn add_client<R>(repo: &R, form: ClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let new_client = form.into_new_client().map_err(|err| {
        log::error!("Failed to validate client form: {err}");
        ServiceError::from(err)
    })?;

    repo.add_client(&new_client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        ServiceError::from(err)
    })
}

/// Loads the client, applies the form to it and stores the result.
pub fn update_client<R>(repo: &R, client_id: ClientId, form: ClientForm) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let mut client = repo
        .get_client_by_id(client_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    form.apply_to(&mut client).map_err(|err| {
        log::error!("Failed to validate client form: {err}");
        ServiceError::from(err)
    })?;

    repo.update_client(&client).map_err(|err| {
        log::error!("Failed to update client {client_id}: {err}");
        ServiceError::from(err)
    })
}

/// Removes the client with the given identifier.
pub fn delete_client<R>(repo: &R, client_id: ClientId) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    repo.delete_client(client_id).map_err(|err| {
        log::error!("Failed to delete client {client_id}: {err}");
        ServiceError::from(err)
    })
}

/// Returns up to `limit` previous searches.
pub fn last_search_parameters<R>(repo: &R, limit: usize) -> ServiceResult<Vec<ClientSearchParameters>>
where
    R: ClientReader + ?Sized,
{
    repo.last_search_parameters(limit)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::{Email, PersonalId};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn sample_client(id: i32, first_name: &str, last_name: &str) -> Client {
        let now = Utc::now().naive_utc();
        Client {
            id: ClientId::new(id).unwrap(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: Email::new("john.doe@test.com").unwrap(),
            personal_id: PersonalId::new("12345678901").unwrap(),
            mobile_number: "12345".to_string(),
            profile_photo: "test".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_form(last_name: &str) -> ClientForm {
        ClientForm {
            first_name: "John".to_string(),
            last_name: last_name.to_string(),
            email: "john.doe@test.com".to_string(),
            personal_id: "12345678901".to_string(),
            mobile_number: "12345".to_string(),
            profile_photo: "test".to_string(),
        }
    }

    #[test]
    fn search_trims_filters_and_applies_default_paging() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .withf(|query| {
                *query
                    == ClientListQuery::new()
                        .first_name("John")
                        .paginate(1, DEFAULT_ITEMS_PER_PAGE)
            })
            .times(1)
            .returning(|_| Ok((1, vec![sample_client(1, "John", "Doe")])));

        let result = search_clients(
            &repo,
            ClientSearchParams {
                first_name: Some("  John ".to_string()),
                last_name: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.page, 1);
        assert_eq!(result.total, 1);
        assert_eq!(result.pages, vec![Some(1)]);
    }

    #[test]
    fn search_passes_explicit_paging() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .withf(|query| {
                *query
                    == ClientListQuery::new()
                        .last_name("Smith")
                        .paginate(2, 5)
            })
            .times(1)
            .returning(|_| Ok((7, vec![sample_client(6, "Jane", "Smith")])));

        let result = search_clients(
            &repo,
            ClientSearchParams {
                last_name: Some("Smith".to_string()),
                page: Some(2),
                page_size: Some(5),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(result.page, 2);
        assert_eq!(result.pages, vec![Some(1), Some(2)]);
    }

    #[test]
    fn search_surfaces_storage_faults() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .returning(|_| Err(RepositoryError::ConnectionError("down".to_string())));

        let err = search_clients(&repo, ClientSearchParams::default()).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repository(RepositoryError::ConnectionError(_))
        ));
    }

    #[test]
    fn add_client_rejects_invalid_form_without_touching_repo() {
        let mut repo = MockRepository::new();
        repo.expect_add_client().never();

        let mut form = sample_form("Doe");
        form.personal_id = "abc".to_string();

        assert!(matches!(
            add_client(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn add_client_persists_valid_form() {
        let mut repo = MockRepository::new();
        repo.expect_add_client()
            .withf(|new_client| new_client.first_name == "John" && new_client.last_name == "Doe")
            .times(1)
            .returning(|new_client| {
                let mut client = sample_client(1, "", "");
                client.first_name = new_client.first_name.clone();
                client.last_name = new_client.last_name.clone();
                Ok(client)
            });

        let client = add_client(&repo, sample_form("Doe")).unwrap();
        assert_eq!(client.id.get(), 1);
        assert_eq!(client.full_name(), "John Doe");
    }

    #[test]
    fn update_client_applies_form_to_stored_client() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_client(id.get(), "John", "Doe"))));
        repo.expect_update_client()
            .withf(|client| client.id.get() == 3 && client.last_name == "Smith")
            .times(1)
            .returning(|client| Ok(client.clone()));

        let updated =
            update_client(&repo, ClientId::new(3).unwrap(), sample_form("Smith")).unwrap();
        assert_eq!(updated.last_name, "Smith");
    }

    #[test]
    fn update_missing_client_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id().returning(|_| Ok(None));
        repo.expect_update_client().never();

        assert!(matches!(
            update_client(&repo, ClientId::new(9).unwrap(), sample_form("Smith")),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn get_client_returns_none_for_unknown_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id().returning(|_| Ok(None));

        assert!(get_client(&repo, ClientId::new(8).unwrap()).unwrap().is_none());
    }

    #[test]
    fn delete_client_forwards_id() {
        let mut repo = MockRepository::new();
        repo.expect_delete_client()
            .withf(|id| id.get() == 5)
            .times(1)
            .returning(|_| Ok(()));

        delete_client(&repo, ClientId::new(5).unwrap()).unwrap();
    }

    #[test]
    fn last_search_parameters_passes_through() {
        let mut repo = MockRepository::new();
        repo.expect_last_search_parameters()
            .withf(|limit| *limit == 3)
            .returning(|_| Ok(Vec::new()));

        assert!(last_search_parameters(&repo, 3).unwrap().is_empty());
    }
}
