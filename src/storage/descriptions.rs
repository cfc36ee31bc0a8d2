use super::db::{next_id, Database, DatabaseError};
use super::models::{DescriptionRecord, NewDescription};
use super::tables::*;

impl Database {
    // ========================================================================
    // Description operations
    // ========================================================================

    /// Insert a description. `description` is NOT NULL.
    pub fn insert_description(
        &self,
        description: &NewDescription,
    ) -> Result<DescriptionRecord, DatabaseError> {
        let text = description
            .description
            .clone()
            .ok_or_else(|| DatabaseError::Constraint("description may not be null".to_string()))?;

        let write_txn = self.begin_write()?;
        let record = {
            let mut table = write_txn.open_table(DESCRIPTIONS)?;
            let record = DescriptionRecord {
                id: next_id(&table)?,
                description: text,
            };
            let data = rmp_serde::to_vec_named(&record)?;
            table.insert(record.id, data.as_slice())?;
            record
        };
        write_txn.commit()?;
        Ok(record)
    }

    /// Get a description by id
    pub fn get_description(&self, id: u64) -> Result<Option<DescriptionRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(DESCRIPTIONS)?;

        match table.get(id)? {
            Some(data) => Ok(Some(rmp_serde::from_slice(data.value())?)),
            None => Ok(None),
        }
    }

    /// Delete a description by id. Returns false when no row matched.
    pub fn delete_description(&self, id: u64) -> Result<bool, DatabaseError> {
        let write_txn = self.begin_write()?;
        let deleted = {
            let mut table = write_txn.open_table(DESCRIPTIONS)?;
            let removed = table.remove(id)?;
            removed.is_some()
        };
        write_txn.commit()?;
        Ok(deleted)
    }
}
