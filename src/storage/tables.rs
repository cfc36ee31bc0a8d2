use redb::TableDefinition;

/// Image records: id -> ImageRecord (msgpack)
pub const IMAGES: TableDefinition<u64, &[u8]> = TableDefinition::new("images");

/// Image name index: img_name -> id (enforces name uniqueness)
pub const IMAGE_NAMES: TableDefinition<&str, u64> = TableDefinition::new("image_names");

/// Link records: id -> LinkRecord (msgpack)
pub const LINKS: TableDefinition<u64, &[u8]> = TableDefinition::new("links");

/// Description records: id -> DescriptionRecord (msgpack)
pub const DESCRIPTIONS: TableDefinition<u64, &[u8]> = TableDefinition::new("descriptions");
