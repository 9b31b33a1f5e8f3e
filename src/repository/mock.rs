//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::search::ClientSearchParameters;
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
        fn last_search_parameters(
            &self,
            limit: usize,
        ) -> RepositoryResult<Vec<ClientSearchParameters>>;
    }

    impl ClientWriter for Repository {
        fn add_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn update_client(&self, client: &Client) -> RepositoryResult<Client>;
        fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
    }
}
