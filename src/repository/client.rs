//! Client persistence backed by the `clients` table.

use chrono::Utc;
use diesel::define_sql_function;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel::sqlite::Sqlite;
use log::debug;

use crate::{
    domain::{
        client::{Client, NewClient},
        search::ClientSearchParameters,
        types::ClientId,
    },
    models::client::{
        Client as DbClient, NewClient as DbNewClient, UpdateClient as DbUpdateClient,
    },
    repository::{
        ClientListQuery, ClientReader, ClientWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::clients,
};

define_sql_function! {
    /// 1-based position of `needle` in `haystack`, 0 when absent. Byte-exact,
    /// so matching is case-sensitive and wildcard-free.
    fn instr(haystack: Text, needle: Text) -> Integer;
}

/// Base query with the name filters of `query` applied.
fn filtered_clients(query: &ClientListQuery) -> clients::BoxedQuery<'static, Sqlite> {
    let mut filtered = clients::table.into_boxed();

    if let Some(term) = &query.first_name {
        filtered = filtered.filter(instr(clients::first_name, term.clone()).gt(0));
    }
    if let Some(term) = &query.last_name {
        filtered = filtered.filter(instr(clients::last_name, term.clone()).gt(0));
    }

    filtered
}

fn into_domain(rows: Vec<DbClient>) -> RepositoryResult<Vec<Client>> {
    rows.into_iter()
        .map(|row| Client::try_from(row).map_err(RepositoryError::from))
        .collect()
}

/// Converts a SQL `COUNT(*)` result without truncation.
fn count_to_usize(total: i64) -> RepositoryResult<usize> {
    usize::try_from(total)
        .map_err(|_| RepositoryError::Unexpected(format!("Invalid client count: {total}")))
}

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let mut conn = self.conn()?;

        let db_client = clients::table
            .find(id.get())
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        match db_client {
            Some(db_client) => Ok(Some(
                Client::try_from(db_client).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        let paging = query
            .pagination
            .as_ref()
            .map(|pagination| pagination.limit_offset())
            .transpose()?;

        let mut conn = self.conn()?;

        let total: i64 = filtered_clients(&query).count().get_result(&mut conn)?;

        let mut items = filtered_clients(&query).order(clients::id.asc());
        if let Some((limit, offset)) = paging {
            items = items.limit(limit).offset(offset);
        }

        let rows = items
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?;

        debug!(
            "Listed {} of {total} clients for {:?}",
            rows.len(),
            query
        );

        Ok((count_to_usize(total)?, into_domain(rows)?))
    }

    fn last_search_parameters(
        &self,
        limit: usize,
    ) -> RepositoryResult<Vec<ClientSearchParameters>> {
        debug!("Search history is not recorded, ignoring request for {limit} entries");
        Ok(Vec::new())
    }
}

impl ClientWriter for DieselRepository {
    fn add_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;

        let insertable = DbNewClient::from_domain(new_client, Utc::now().naive_utc());

        let stored = diesel::insert_into(clients::table)
            .values(&insertable)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)?;

        Client::try_from(stored).map_err(RepositoryError::from)
    }

    fn update_client(&self, client: &Client) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;

        let changes = DbUpdateClient::from_domain(client, Utc::now().naive_utc());

        let updated = diesel::update(clients::table.find(client.id.get()))
            .set(&changes)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)?;

        Client::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(clients::table.find(client_id.get())).execute(&mut conn)?;
        if deleted == 0 {
            debug!("Client {client_id} was already absent");
        }

        Ok(())
    }
}
