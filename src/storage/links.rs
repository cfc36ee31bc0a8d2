use redb::ReadableTable;

use super::db::{next_id, Database, DatabaseError};
use super::models::{LinkRecord, NewLink};
use super::tables::*;

impl Database {
    // ========================================================================
    // Link operations
    // ========================================================================

    /// Insert a link. `github_link` is NOT NULL.
    pub fn insert_link(&self, link: &NewLink) -> Result<LinkRecord, DatabaseError> {
        let github_link = link
            .github_link
            .clone()
            .ok_or_else(|| DatabaseError::Constraint("github_link may not be null".to_string()))?;

        let write_txn = self.begin_write()?;
        let record = {
            let mut table = write_txn.open_table(LINKS)?;
            let record = LinkRecord {
                id: next_id(&table)?,
                live_link: link.live_link.clone(),
                github_link,
            };
            let data = rmp_serde::to_vec_named(&record)?;
            table.insert(record.id, data.as_slice())?;
            record
        };
        write_txn.commit()?;
        Ok(record)
    }

    /// Get a link by id
    pub fn get_link(&self, id: u64) -> Result<Option<LinkRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(LINKS)?;

        match table.get(id)? {
            Some(data) => {
                let link: LinkRecord = rmp_serde::from_slice(data.value())?;
                Ok(Some(link))
            }
            None => Ok(None),
        }
    }

    /// List all links
    pub fn list_links(&self) -> Result<Vec<LinkRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(LINKS)?;

        let mut links = Vec::new();
        for result in table.iter()? {
            let (_, value) = result?;
            let link: LinkRecord = rmp_serde::from_slice(value.value())?;
            links.push(link);
        }

        Ok(links)
    }

    /// Delete a link by id. Returns false when no row matched.
    pub fn delete_link(&self, id: u64) -> Result<bool, DatabaseError> {
        let write_txn = self.begin_write()?;
        let deleted = {
            let mut table = write_txn.open_table(LINKS)?;
            let removed = table.remove(id)?;
            removed.is_some()
        };
        write_txn.commit()?;
        Ok(deleted)
    }
}
