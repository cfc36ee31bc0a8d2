use portfolio_backend::storage::models::{NewDescription, NewLink};
use portfolio_backend::storage::{Database, DatabaseError};

fn test_db() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("data")).unwrap();
    (dir, db)
}

fn new_link(live: Option<&str>, github: &str) -> NewLink {
    NewLink {
        live_link: live.map(|s| s.to_string()),
        github_link: Some(github.to_string()),
    }
}

fn new_description(text: &str) -> NewDescription {
    NewDescription {
        description: Some(text.to_string()),
    }
}

// ============================================================================
// Image tests
// ============================================================================

#[test]
fn test_insert_and_get_image() {
    let (_dir, db) = test_db();

    let image = db.insert_image(Some("cat.png")).unwrap();
    assert_eq!(image.id, 1);
    assert_eq!(image.img_name.as_deref(), Some("cat.png"));

    let retrieved = db.get_image(1).unwrap().expect("image should exist");
    assert_eq!(retrieved, image);
}

#[test]
fn test_image_name_is_unique() {
    let (_dir, db) = test_db();
    db.insert_image(Some("dup.png")).unwrap();

    let err = db.insert_image(Some("dup.png")).unwrap_err();
    assert!(matches!(err, DatabaseError::Constraint(_)));
    assert!(err.is_constraint());

    // The failed insert left nothing behind
    assert!(db.get_image(2).unwrap().is_none());
    assert_eq!(db.insert_image(Some("other.png")).unwrap().id, 2);
}

#[test]
fn test_images_without_name_do_not_collide() {
    let (_dir, db) = test_db();

    let first = db.insert_image(None).unwrap();
    let second = db.insert_image(None).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(db.get_image(second.id).unwrap().unwrap().img_name, None);
}

#[test]
fn test_get_image_by_name() {
    let (_dir, db) = test_db();
    db.insert_image(Some("a.png")).unwrap();
    db.insert_image(Some("b.png")).unwrap();

    let image = db.get_image_by_name("b.png").unwrap().unwrap();
    assert_eq!(image.id, 2);
    assert!(db.get_image_by_name("c.png").unwrap().is_none());
}

#[test]
fn test_delete_image_frees_name() {
    let (_dir, db) = test_db();
    let image = db.insert_image(Some("again.png")).unwrap();

    assert!(db.delete_image(image.id).unwrap());
    assert!(db.get_image(image.id).unwrap().is_none());
    assert!(db.get_image_by_name("again.png").unwrap().is_none());
    assert!(!db.delete_image(image.id).unwrap());

    db.insert_image(Some("again.png")).unwrap();
}

// ============================================================================
// Link tests
// ============================================================================

#[test]
fn test_insert_and_get_link() {
    let (_dir, db) = test_db();

    let link = db
        .insert_link(&new_link(Some("https://site.dev"), "https://github.com/me/site"))
        .unwrap();
    assert_eq!(link.id, 1);

    let retrieved = db.get_link(1).unwrap().expect("link should exist");
    assert_eq!(retrieved.live_link.as_deref(), Some("https://site.dev"));
    assert_eq!(retrieved.github_link, "https://github.com/me/site");
}

#[test]
fn test_link_requires_github_link() {
    let (_dir, db) = test_db();

    let err = db
        .insert_link(&NewLink {
            live_link: Some("https://site.dev".to_string()),
            github_link: None,
        })
        .unwrap_err();
    assert!(err.is_constraint());
    assert!(db.list_links().unwrap().is_empty());
}

#[test]
fn test_link_live_link_optional() {
    let (_dir, db) = test_db();
    let link = db.insert_link(&new_link(None, "g")).unwrap();
    assert_eq!(db.get_link(link.id).unwrap().unwrap().live_link, None);
}

#[test]
fn test_get_link_not_found() {
    let (_dir, db) = test_db();
    assert!(db.get_link(1).unwrap().is_none());
}

#[test]
fn test_list_links() {
    let (_dir, db) = test_db();
    db.insert_link(&new_link(None, "one")).unwrap();
    db.insert_link(&new_link(Some("live"), "two")).unwrap();

    let links = db.list_links().unwrap();
    assert_eq!(links.len(), 2);

    let mut github: Vec<&str> = links.iter().map(|l| l.github_link.as_str()).collect();
    github.sort_unstable();
    assert_eq!(github, vec!["one", "two"]);
}

#[test]
fn test_delete_link() {
    let (_dir, db) = test_db();
    db.insert_link(&new_link(None, "gone")).unwrap();

    assert!(db.delete_link(1).unwrap());
    assert!(db.get_link(1).unwrap().is_none());
}

#[test]
fn test_delete_link_not_found() {
    let (_dir, db) = test_db();
    assert!(!db.delete_link(5).unwrap());
}

#[test]
fn test_ids_follow_highest_remaining_row() {
    let (_dir, db) = test_db();
    db.insert_link(&new_link(None, "a")).unwrap();
    db.insert_link(&new_link(None, "b")).unwrap();
    db.insert_link(&new_link(None, "c")).unwrap();

    db.delete_link(2).unwrap();
    assert_eq!(db.insert_link(&new_link(None, "d")).unwrap().id, 4);
}

#[test]
fn test_link_strings_round_trip() {
    let (_dir, db) = test_db();
    let live = "https://例え.jp/?q=\"x\"&y=\\z\n🚀";
    let github = "{\"not\": [\"json\"]}\u{7f}";

    let link = db.insert_link(&new_link(Some(live), github)).unwrap();
    let retrieved = db.get_link(link.id).unwrap().unwrap();
    assert_eq!(retrieved.live_link.as_deref(), Some(live));
    assert_eq!(retrieved.github_link, github);
}

// ============================================================================
// Description tests
// ============================================================================

#[test]
fn test_insert_and_get_description() {
    let (_dir, db) = test_db();

    let description = db.insert_description(&new_description("A portfolio")).unwrap();
    assert_eq!(description.id, 1);

    let retrieved = db.get_description(1).unwrap().unwrap();
    assert_eq!(retrieved.description, "A portfolio");
}

#[test]
fn test_description_required() {
    let (_dir, db) = test_db();
    let err = db
        .insert_description(&NewDescription::default())
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Constraint(_)));
}

#[test]
fn test_delete_description() {
    let (_dir, db) = test_db();
    db.insert_description(&new_description("bye")).unwrap();

    assert!(db.delete_description(1).unwrap());
    assert!(db.get_description(1).unwrap().is_none());
    assert!(!db.delete_description(1).unwrap());
}

#[test]
fn test_entities_have_independent_ids() {
    let (_dir, db) = test_db();
    assert_eq!(db.insert_image(Some("x.png")).unwrap().id, 1);
    assert_eq!(db.insert_link(&new_link(None, "g")).unwrap().id, 1);
    assert_eq!(db.insert_description(&new_description("d")).unwrap().id, 1);
}

#[test]
fn test_reopen_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    {
        let db = Database::open(dir.path().join("data")).unwrap();
        db.insert_link(&new_link(None, "persisted")).unwrap();
        db.insert_image(Some("kept.png")).unwrap();
    }

    let db = Database::open(dir.path().join("data")).unwrap();
    assert_eq!(db.get_link(1).unwrap().unwrap().github_link, "persisted");
    assert!(db.insert_image(Some("kept.png")).unwrap_err().is_constraint());
}
