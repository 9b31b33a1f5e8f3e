use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        client::{Client, NewClient},
        search::ClientSearchParameters,
        types::ClientId,
    },
    repository::errors::{RepositoryError, RepositoryResult},
};

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository sharing a SQLite connection pool.
///
/// Every call checks out its own connection and returns it to the pool when
/// the call completes.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Returns `(limit, offset)` for a 1-based page.
    pub fn limit_offset(&self) -> RepositoryResult<(i64, i64)> {
        if self.page < 1 || self.per_page < 1 {
            return Err(RepositoryError::ValidationError(format!(
                "page and page size must be at least 1, got page {} of size {}",
                self.page, self.per_page
            )));
        }
        let limit = i64::try_from(self.per_page)
            .map_err(|_| RepositoryError::ValidationError("page size too large".to_string()))?;
        let offset = i64::try_from(self.page - 1)
            .ok()
            .and_then(|page| page.checked_mul(limit))
            .ok_or_else(|| RepositoryError::ValidationError("page out of range".to_string()))?;
        Ok((limit, offset))
    }
}

/// Filters and paging for [`ClientReader::list_clients`].
///
/// Name filters use contains semantics; when both are set a client must match
/// both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientListQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, term: impl Into<String>) -> Self {
        self.first_name = Some(term.into());
        self
    }

    pub fn last_name(mut self, term: impl Into<String>) -> Self {
        self.last_name = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    /// Returns the total number of matches and the requested page of them,
    /// ordered by id.
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
    /// Most recent search parameters, newest first. Search history is not
    /// recorded yet, so this is always empty.
    fn last_search_parameters(&self, limit: usize)
    -> RepositoryResult<Vec<ClientSearchParameters>>;
}

pub trait ClientWriter {
    /// Inserts the client and returns the stored record with its new id.
    fn add_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    /// Overwrites all mutable fields of an existing client.
    fn update_client(&self, client: &Client) -> RepositoryResult<Client>;
    /// Removes the client; deleting an unknown id is a no-op.
    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
}
