use async_trait::async_trait;
use repo_framework::{
    ApiService, ChannelService, CollectionBackend, FieldValue, PageRequest, RemoteResource,
    RepoError, Repository,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// --- Test Resource ---

#[derive(Clone, Debug, PartialEq)]
struct Note {
    id: u64,
    title: String,
    pinned: bool,
}

#[derive(Debug)]
struct NoteCreate {
    title: String,
}

#[derive(Debug)]
struct NoteUpdate {
    title: Option<String>,
    pinned: Option<bool>,
}

impl RemoteResource for Note {
    type Id = u64;
    type Create = NoteCreate;
    type Update = NoteUpdate;

    fn from_create(id: u64, params: NoteCreate) -> Result<Self, String> {
        if params.title.is_empty() {
            return Err("title must not be empty".to_string());
        }
        Ok(Self {
            id,
            title: params.title,
            pinned: false,
        })
    }

    fn apply_update(&mut self, update: NoteUpdate) -> Result<(), String> {
        if let Some(title) = update.title {
            if title.is_empty() {
                return Err("title must not be empty".to_string());
            }
            self.title = title;
        }
        if let Some(pinned) = update.pinned {
            self.pinned = pinned;
        }
        Ok(())
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::Str(self.title.clone())),
            "pinned" => Some(FieldValue::Bool(self.pinned)),
            _ => None,
        }
    }
}

struct NoteRepository {
    service: ChannelService<Note>,
}

#[async_trait]
impl Repository<Note> for NoteRepository {
    type Service = ChannelService<Note>;
    type Error = RepoError;

    fn service(&self) -> &ChannelService<Note> {
        &self.service
    }

    fn map_error(e: RepoError) -> RepoError {
        e
    }
}

fn start_backend() -> NoteRepository {
    let counter = Arc::new(AtomicU64::new(1));
    let (backend, service) = CollectionBackend::new(32, move || {
        counter.fetch_add(1, Ordering::SeqCst)
    });
    tokio::spawn(backend.run());
    NoteRepository { service }
}

async fn seed(repo: &NoteRepository, titles: &[&str]) -> Vec<Note> {
    let mut notes = Vec::new();
    for title in titles {
        let note = repo
            .create(NoteCreate {
                title: title.to_string(),
            })
            .await
            .expect("Failed to create note");
        notes.push(note);
    }
    notes
}

// --- Tests ---

#[tokio::test]
async fn test_full_repository_lifecycle() {
    let repo = start_backend();

    // 1. Create
    let note = repo
        .create(NoteCreate {
            title: "first".into(),
        })
        .await
        .unwrap();
    assert_eq!(note.id, 1); // First ID should be 1
    assert_eq!(note.title, "first");

    // 2. Get
    let fetched = repo.get_by_id(note.id).await.unwrap();
    assert_eq!(fetched, note);

    // 3. Update
    let updated = repo
        .update(
            note.id,
            NoteUpdate {
                title: Some("renamed".into()),
                pinned: Some(true),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "renamed");
    assert!(updated.pinned);

    // Update is visible on the next read
    let fetched = repo.get_by_id(note.id).await.unwrap();
    assert_eq!(fetched, updated);

    // 4. Delete, then the id is gone
    repo.delete(note.id).await.unwrap();
    let result = repo.get_by_id(note.id).await;
    assert!(matches!(result, Err(RepoError::NotFound(_))));
}

#[tokio::test]
async fn test_unknown_id_fails_with_not_found() {
    let repo = start_backend();

    let result = repo.get_by_id(404).await;
    assert!(matches!(result, Err(RepoError::NotFound(_))));

    let result = repo
        .update(
            404,
            NoteUpdate {
                title: Some("x".into()),
                pinned: None,
            },
        )
        .await;
    assert!(matches!(result, Err(RepoError::NotFound(_))));

    let result = repo.delete(404).await;
    assert!(matches!(result, Err(RepoError::NotFound(_))));
}

#[tokio::test]
async fn test_server_side_validation_is_surfaced() {
    let repo = start_backend();

    let result = repo.create(NoteCreate { title: "".into() }).await;
    assert!(matches!(result, Err(RepoError::Validation(_))));

    let note = repo
        .create(NoteCreate {
            title: "keep".into(),
        })
        .await
        .unwrap();
    let result = repo
        .update(
            note.id,
            NoteUpdate {
                title: Some("".into()),
                pinned: None,
            },
        )
        .await;
    assert!(matches!(result, Err(RepoError::Validation(_))));

    // The rejected update left the entity untouched
    let fetched = repo.get_by_id(note.id).await.unwrap();
    assert_eq!(fetched.title, "keep");
}

#[tokio::test]
async fn test_pagination_walks_disjoint_slices() {
    let repo = start_backend();
    seed(&repo, &["a", "b", "c", "d", "e"]).await;

    let first = repo
        .get_all(PageRequest::new().page(0).size(2))
        .await
        .unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first.total_items, 5);
    assert_eq!(first.total_pages, 3);
    assert!(first.has_next);
    assert!(!first.has_previous);

    let second = repo
        .get_all(PageRequest::new().page(1).size(2))
        .await
        .unwrap();
    let third = repo
        .get_all(PageRequest::new().page(2).size(2))
        .await
        .unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(third.len(), 1);
    assert!(!third.has_next);
    assert!(third.has_previous);

    // No overlap, no gaps: the three slices reassemble the collection.
    let mut walked: Vec<String> = first
        .items
        .into_iter()
        .chain(second.items)
        .chain(third.items)
        .map(|n| n.title)
        .collect();
    assert_eq!(walked, vec!["a", "b", "c", "d", "e"]);
    walked.dedup();
    assert_eq!(walked.len(), 5);

    // A page past the end is empty but keeps the totals.
    let past = repo
        .get_all(PageRequest::new().page(9).size(2))
        .await
        .unwrap();
    assert!(past.is_empty());
    assert_eq!(past.total_items, 5);
}

#[tokio::test]
async fn test_sort_orders_by_exposed_field() {
    let repo = start_backend();
    seed(&repo, &["delta", "alpha", "echo", "bravo", "charlie"]).await;

    let page = repo
        .get_all(PageRequest::new().page(0).size(2).sort("title"))
        .await
        .unwrap();
    let titles: Vec<&str> = page.items.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["alpha", "bravo"]);
    assert_eq!(page.total_items, 5);
    assert_eq!(page.page, 0);
    assert_eq!(page.page_size, 2);
}

#[tokio::test]
async fn test_unsupported_sort_falls_back_to_insertion_order() {
    let repo = start_backend();
    seed(&repo, &["delta", "alpha", "echo"]).await;

    let page = repo
        .get_all(PageRequest::new().sort("no_such_field"))
        .await
        .unwrap();
    let titles: Vec<&str> = page.items.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["delta", "alpha", "echo"]);
}

#[tokio::test]
async fn test_filters_narrow_the_collection() {
    let repo = start_backend();
    let notes = seed(&repo, &["a", "b", "c"]).await;
    repo.update(
        notes[1].id,
        NoteUpdate {
            title: None,
            pinned: Some(true),
        },
    )
    .await
    .unwrap();

    let pinned = repo
        .get_all(PageRequest::new().filter("pinned", "true"))
        .await
        .unwrap();
    assert_eq!(pinned.total_items, 1);
    assert_eq!(pinned.items[0].title, "b");

    // Unknown filter keys are ignored rather than excluding everything.
    let all = repo
        .get_all(PageRequest::new().filter("no_such_key", "x"))
        .await
        .unwrap();
    assert_eq!(all.total_items, 3);
}

#[tokio::test]
async fn test_zero_page_size_is_rejected_before_the_wire() {
    let repo = start_backend();

    let result = repo.get_all(PageRequest::new().size(0)).await;
    assert!(matches!(result, Err(RepoError::InvalidArgument(_))));

    // The backend guards the wire too, for callers bypassing the repository.
    let envelope = repo
        .service()
        .get_all(PageRequest::new().size(0))
        .await
        .unwrap();
    assert_eq!(envelope.status, 400);
    assert!(matches!(
        envelope.into_result(),
        Err(RepoError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_dropped_backend_surfaces_as_transport_failure() {
    let counter = Arc::new(AtomicU64::new(1));
    let (backend, service) = CollectionBackend::<Note>::new(4, move || {
        counter.fetch_add(1, Ordering::SeqCst)
    });
    drop(backend);

    let repo = NoteRepository { service };
    let result = repo.get_by_id(1).await;
    assert!(matches!(result, Err(RepoError::Transport(_))));
}
