use redb::ReadableTable;

use super::db::{next_id, Database, DatabaseError};
use super::models::ImageRecord;
use super::tables::*;

impl Database {
    // ========================================================================
    // Image operations
    // ========================================================================

    /// Insert an image row, failing if `img_name` is already taken.
    pub fn insert_image(&self, img_name: Option<&str>) -> Result<ImageRecord, DatabaseError> {
        let write_txn = self.begin_write()?;
        let record = {
            let mut table = write_txn.open_table(IMAGES)?;
            let mut name_table = write_txn.open_table(IMAGE_NAMES)?;

            if let Some(name) = img_name {
                if name_table.get(name)?.is_some() {
                    // Dropping the transaction aborts it
                    return Err(DatabaseError::Constraint(format!(
                        "image name '{name}' already exists"
                    )));
                }
            }

            let record = ImageRecord {
                id: next_id(&table)?,
                img_name: img_name.map(|s| s.to_string()),
            };
            let data = rmp_serde::to_vec_named(&record)?;
            table.insert(record.id, data.as_slice())?;

            if let Some(ref name) = record.img_name {
                name_table.insert(name.as_str(), record.id)?;
            }
            record
        };
        write_txn.commit()?;
        Ok(record)
    }

    /// Get an image by id
    pub fn get_image(&self, id: u64) -> Result<Option<ImageRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(IMAGES)?;

        match table.get(id)? {
            Some(data) => {
                let image: ImageRecord = rmp_serde::from_slice(data.value())?;
                Ok(Some(image))
            }
            None => Ok(None),
        }
    }

    /// Get an image by its stored name
    pub fn get_image_by_name(&self, name: &str) -> Result<Option<ImageRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let name_table = read_txn.open_table(IMAGE_NAMES)?;

        let id = match name_table.get(name)? {
            Some(id) => id.value(),
            None => return Ok(None),
        };

        let table = read_txn.open_table(IMAGES)?;
        match table.get(id)? {
            Some(data) => Ok(Some(rmp_serde::from_slice(data.value())?)),
            None => Ok(None),
        }
    }

    /// Delete an image row and its name index entry.
    ///
    /// Not exposed over HTTP; used to undo an insert whose file write failed.
    pub fn delete_image(&self, id: u64) -> Result<bool, DatabaseError> {
        let write_txn = self.begin_write()?;

        let existing: Option<ImageRecord> = {
            let table = write_txn.open_table(IMAGES)?;
            let result = match table.get(id)? {
                Some(data) => Some(rmp_serde::from_slice(data.value())?),
                None => None,
            };
            result
        };

        let deleted = match existing {
            Some(image) => {
                {
                    let mut table = write_txn.open_table(IMAGES)?;
                    table.remove(id)?;
                }
                if let Some(ref name) = image.img_name {
                    let mut name_table = write_txn.open_table(IMAGE_NAMES)?;
                    name_table.remove(name.as_str())?;
                }
                true
            }
            None => false,
        };

        write_txn.commit()?;
        Ok(deleted)
    }
}
