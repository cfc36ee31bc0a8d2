mod descriptions;
mod health;
mod images;
mod links;
mod static_files;

pub use descriptions::{create_description, delete_description, get_description};
pub use health::health;
pub use images::{get_image, upload_image};
pub use links::{create_link, delete_link, get_link, list_links};
pub use static_files::serve_image;
