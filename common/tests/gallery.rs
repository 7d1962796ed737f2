use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use async_trait::async_trait;

use api::photo::{Photo, PhotoUuid};
use common::config::GalleryConfig;
use common::gallery::{
    DeletionState, DraftFile, Gallery, GalleryError, ModalRegion, PhotoBackend, PreviewSource,
    UploadState,
};

#[derive(Clone, Debug, PartialEq)]
struct TestFile {
    name: String,
    mime: String,
}

impl DraftFile for TestFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime.clone()
    }
}

fn png(name: &str) -> TestFile {
    TestFile {
        name: name.to_string(),
        mime: String::from("image/png"),
    }
}

fn photo(id: PhotoUuid) -> Photo {
    Photo {
        id,
        description: format!("photo {id}"),
        image_path: format!("{id}.png"),
    }
}

// in-memory stand-in for the photo api
//
// every call yields once before answering, so concurrent workflows actually interleave
#[derive(Default)]
struct MemoryBackend {
    photos: RefCell<Vec<Photo>>,
    next_id: Cell<PhotoUuid>,
    list_calls: Cell<usize>,
    upload_calls: Cell<usize>,
    delete_calls: Cell<usize>,
    list_error: RefCell<Option<GalleryError>>,
    upload_error: RefCell<Option<GalleryError>>,
    delete_error: RefCell<Option<GalleryError>>,
}

impl MemoryBackend {
    fn with_photos(ids: &[PhotoUuid]) -> Self {
        let backend = MemoryBackend::default();
        *backend.photos.borrow_mut() = ids.iter().map(|id| photo(*id)).collect();
        backend
            .next_id
            .set(ids.iter().copied().max().unwrap_or(0) + 1);
        backend
    }

    fn ids(&self) -> Vec<PhotoUuid> {
        self.photos.borrow().iter().map(|p| p.id).collect()
    }
}

#[async_trait(?Send)]
impl PhotoBackend for MemoryBackend {
    type File = TestFile;

    async fn list_photos(&self) -> Result<Vec<Photo>, GalleryError> {
        self.list_calls.set(self.list_calls.get() + 1);
        tokio::task::yield_now().await;

        if let Some(err) = self.list_error.borrow().clone() {
            return Err(err);
        }
        Ok(self.photos.borrow().clone())
    }

    async fn upload_photo(
        &self,
        description: &str,
        file: &TestFile,
    ) -> Result<Option<Photo>, GalleryError> {
        self.upload_calls.set(self.upload_calls.get() + 1);
        tokio::task::yield_now().await;

        if let Some(err) = self.upload_error.borrow().clone() {
            return Err(err);
        }

        let created = Photo {
            id: self.next_id.get(),
            description: description.to_string(),
            image_path: file.name.clone(),
        };
        self.next_id.set(created.id + 1);
        self.photos.borrow_mut().push(created.clone());
        Ok(Some(created))
    }

    async fn delete_photo(&self, photo_uuid: PhotoUuid) -> Result<(), GalleryError> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        tokio::task::yield_now().await;

        if let Some(err) = self.delete_error.borrow().clone() {
            return Err(err);
        }

        let mut photos = self.photos.borrow_mut();
        match photos.iter().position(|p| p.id == photo_uuid) {
            Some(index) => {
                photos.remove(index);
                Ok(())
            }
            None => Err(GalleryError::NotFound(String::from("photo not found"))),
        }
    }
}

#[derive(Default)]
struct Ledger {
    created: Cell<usize>,
    released: Cell<usize>,
    live: RefCell<HashSet<String>>,
}

#[derive(Clone, Default)]
struct Previews {
    ledger: Rc<Ledger>,
}

impl PreviewSource for Previews {
    type File = TestFile;

    fn create(&self, file: &TestFile) -> anyhow::Result<String> {
        let n = self.ledger.created.get() + 1;
        self.ledger.created.set(n);
        let handle = format!("blob:{}#{n}", file.name);
        self.ledger.live.borrow_mut().insert(handle.clone());
        Ok(handle)
    }

    fn release(&self, handle: &str) {
        assert!(
            self.ledger.live.borrow_mut().remove(handle),
            "double release of {handle}"
        );
        self.ledger.released.set(self.ledger.released.get() + 1);
    }
}

type TestGallery = Gallery<MemoryBackend, Previews>;

fn gallery(ids: &[PhotoUuid]) -> (TestGallery, Rc<Ledger>) {
    let previews = Previews::default();
    let ledger = previews.ledger.clone();
    let gallery = Gallery::new(
        GalleryConfig::default(),
        MemoryBackend::with_photos(ids),
        previews,
    );
    (gallery, ledger)
}

fn shown(gallery: &TestGallery) -> Vec<PhotoUuid> {
    gallery.photos().iter().map(|p| p.id).collect()
}

fn active_id(gallery: &TestGallery) -> Option<PhotoUuid> {
    gallery.active_photo().map(|p| p.id)
}

#[tokio::test]
async fn refresh_keeps_server_order() {
    let (gallery, _) = gallery(&[30, 10, 20]);

    gallery.refresh().await;

    assert_eq!(shown(&gallery), vec![30, 10, 20]);
    assert!(gallery.list_error().is_none());
}

#[tokio::test]
async fn list_failure_shows_empty_gallery() {
    let (gallery, _) = gallery(&[1, 2]);
    gallery.refresh().await;

    *gallery.backend().list_error.borrow_mut() =
        Some(GalleryError::transport("failed to list photos"));
    gallery.refresh().await;

    assert!(shown(&gallery).is_empty());
    assert_eq!(
        gallery.list_error().map(|e| e.message().to_string()),
        Some(String::from("failed to list photos"))
    );

    *gallery.backend().list_error.borrow_mut() = None;
    gallery.refresh().await;

    assert_eq!(shown(&gallery), vec![1, 2]);
    assert!(gallery.list_error().is_none());
}

#[tokio::test]
async fn carousel_wraps_and_deleting_active_photo_closes_it() {
    let (gallery, _) = gallery(&[1, 2, 3]);
    gallery.refresh().await;

    assert!(gallery.open_carousel(1));
    gallery.next();
    assert_eq!(active_id(&gallery), Some(3));
    gallery.next();
    assert_eq!(active_id(&gallery), Some(1));
    gallery.prev();
    assert_eq!(active_id(&gallery), Some(3));

    assert!(gallery.request_delete(3));
    assert_eq!(gallery.deletion().state(), DeletionState::Confirming(3));

    gallery.confirm_delete().await.unwrap();

    assert!(!gallery.carousel().is_open());
    assert_eq!(shown(&gallery), vec![1, 2]);
    assert_eq!(gallery.backend().delete_calls.get(), 1);
    assert_eq!(gallery.deletion().state(), DeletionState::Idle);
}

#[tokio::test]
async fn open_carousel_out_of_range_is_refused() {
    let (gallery, _) = gallery(&[1, 2]);
    gallery.refresh().await;

    assert!(!gallery.open_carousel(2));
    assert!(!gallery.carousel().is_open());
}

#[tokio::test]
async fn only_backdrop_dismisses_carousel() {
    let (gallery, _) = gallery(&[1, 2]);
    gallery.refresh().await;
    gallery.open_carousel(0);

    assert!(!gallery.click(ModalRegion::Content));
    assert_eq!(active_id(&gallery), Some(1));

    assert!(gallery.click(ModalRegion::Backdrop));
    assert!(!gallery.carousel().is_open());
}

#[tokio::test]
async fn submit_without_file_never_reaches_network() {
    let (gallery, _) = gallery(&[]);
    gallery.open_upload();
    gallery.set_description("sunset");

    let err = gallery.submit_upload().await.unwrap_err();

    assert_eq!(err, GalleryError::validation("no file selected"));
    assert_eq!(gallery.backend().upload_calls.get(), 0);
    assert_eq!(gallery.upload().state(), UploadState::Editing);
    assert_eq!(
        gallery.upload().error().map(|e| e.message().to_string()),
        Some(String::from("no file selected"))
    );
}

#[tokio::test]
async fn rejected_upload_keeps_draft_and_retry_succeeds() {
    let (gallery, ledger) = gallery(&[1]);
    gallery.refresh().await;

    gallery.open_upload();
    gallery.set_description("cat on a roof");
    gallery.set_file(Some(png("cat.png")));

    *gallery.backend().upload_error.borrow_mut() = Some(GalleryError::transport("duplicate"));
    let err = gallery.submit_upload().await.unwrap_err();
    assert_eq!(err.message(), "duplicate");

    {
        let upload = gallery.upload();
        assert_eq!(upload.state(), UploadState::Editing);
        assert!(!upload.submitting());
        assert_eq!(upload.error().map(|e| e.message()), Some("duplicate"));
        assert_eq!(upload.description(), "cat on a roof");
        assert_eq!(upload.file(), Some(&png("cat.png")));
        assert!(upload.preview().is_some());
    }
    assert_eq!(shown(&gallery), vec![1]);

    // retry without touching the form
    *gallery.backend().upload_error.borrow_mut() = None;
    gallery.submit_upload().await.unwrap();

    assert_eq!(gallery.backend().upload_calls.get(), 2);
    assert_eq!(gallery.upload().state(), UploadState::Idle);
    assert!(gallery.upload().preview().is_none());
    assert!(ledger.live.borrow().is_empty());
    assert_eq!(shown(&gallery), vec![1, 2]);
    assert_eq!(gallery.photos()[1].description, "cat on a roof");
}

#[tokio::test]
async fn preview_handles_never_leak() {
    let (gallery, ledger) = gallery(&[]);
    gallery.open_upload();

    let picks = [
        Some(png("a.png")),
        Some(png("b.png")),
        None,
        None,
        Some(png("c.png")),
    ];
    for pick in picks {
        gallery.set_file(pick);
        assert!(ledger.created.get() - ledger.released.get() <= 1);
    }

    assert!(gallery.close_upload());

    assert_eq!(ledger.created.get(), 3);
    assert_eq!(ledger.released.get(), 3);
    assert!(ledger.live.borrow().is_empty());
}

#[tokio::test]
async fn dropping_gallery_releases_preview() {
    let (gallery, ledger) = gallery(&[]);
    gallery.open_upload();
    gallery.set_file(Some(png("a.png")));

    drop(gallery);

    assert!(ledger.live.borrow().is_empty());
}

#[tokio::test]
async fn upload_form_cannot_close_mid_submit() {
    let (gallery, _) = gallery(&[]);
    gallery.open_upload();
    gallery.set_description("dog");
    gallery.set_file(Some(png("dog.png")));

    let (submitted, closed) = futures::join!(gallery.submit_upload(), async {
        gallery.close_upload()
    });

    assert!(submitted.is_ok());
    assert!(!closed);
    assert_eq!(gallery.upload().state(), UploadState::Idle);
}

#[tokio::test]
async fn delete_is_single_flight() {
    let (gallery, _) = gallery(&[1, 2, 3]);
    gallery.refresh().await;
    gallery.open_carousel(0);
    assert!(gallery.request_delete(1));

    let (first, (requested_again, second)) = futures::join!(gallery.confirm_delete(), async {
        let requested = gallery.request_delete(1);
        (requested, gallery.confirm_delete().await)
    });

    assert_eq!(gallery.backend().delete_calls.get(), 1);
    assert!(!requested_again);
    assert!(first.is_ok());
    assert!(second.is_err());
    assert_eq!(shown(&gallery), vec![2, 3]);
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let (gallery, _) = gallery(&[1, 2]);
    gallery.refresh().await;
    gallery.open_carousel(1);

    assert!(gallery.request_delete(2));
    assert!(gallery.cancel_delete());

    assert!(gallery.confirm_delete().await.is_err());
    assert_eq!(gallery.backend().delete_calls.get(), 0);
    assert_eq!(active_id(&gallery), Some(2));
}

#[tokio::test]
async fn delete_needs_the_viewed_photo() {
    let (gallery, _) = gallery(&[1, 2]);
    gallery.refresh().await;

    assert!(!gallery.request_delete(1));

    gallery.open_carousel(0);
    assert!(!gallery.request_delete(2));
    assert_eq!(gallery.deletion().state(), DeletionState::Idle);
}

#[tokio::test]
async fn failed_delete_keeps_carousel_open() {
    let (gallery, _) = gallery(&[1, 2]);
    gallery.refresh().await;
    gallery.open_carousel(1);

    *gallery.backend().delete_error.borrow_mut() =
        Some(GalleryError::transport("delete failed"));
    gallery.request_delete(2);
    assert!(gallery.confirm_delete().await.is_err());

    assert_eq!(active_id(&gallery), Some(2));
    assert_eq!(gallery.deletion().state(), DeletionState::Idle);
    assert_eq!(
        gallery.deletion().last_error().map(|e| e.message().to_string()),
        Some(String::from("delete failed"))
    );
    assert_eq!(gallery.backend().list_calls.get(), 1);

    // the user may retry
    *gallery.backend().delete_error.borrow_mut() = None;
    assert!(gallery.request_delete(2));
    gallery.confirm_delete().await.unwrap();
    assert_eq!(shown(&gallery), vec![1]);
}

#[tokio::test]
async fn deleting_already_removed_photo_recovers() {
    let (gallery, _) = gallery(&[1, 2]);
    gallery.refresh().await;
    gallery.open_carousel(0);

    // another session got there first
    gallery.backend().photos.borrow_mut().remove(0);

    gallery.request_delete(1);
    let err = gallery.confirm_delete().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(gallery.deletion().state(), DeletionState::Idle);

    gallery.refresh().await;
    assert!(!gallery.carousel().is_open());
    assert_eq!(shown(&gallery), vec![2]);
}

#[tokio::test]
async fn refresh_follows_viewed_photo_by_id() {
    let (gallery, _) = gallery(&[1, 2, 3]);
    gallery.refresh().await;
    gallery.open_carousel(2);

    // photo 1 disappears, so photo 3 shifts from index 2 to index 1
    gallery.backend().photos.borrow_mut().remove(0);
    gallery.refresh().await;

    assert_eq!(gallery.carousel().active(), Some(1));
    assert_eq!(active_id(&gallery), Some(3));
}

#[tokio::test]
async fn refresh_closes_carousel_when_viewed_photo_is_gone() {
    let (gallery, _) = gallery(&[1, 2, 3]);
    gallery.refresh().await;
    gallery.open_carousel(1);
    gallery.request_delete(2);

    gallery.backend().photos.borrow_mut().retain(|p| p.id != 2);
    gallery.refresh().await;

    assert!(!gallery.carousel().is_open());
    assert_eq!(gallery.deletion().state(), DeletionState::Idle);
}

#[tokio::test]
async fn concurrent_upload_and_delete_converge() {
    let (gallery, _) = gallery(&[1, 2]);
    gallery.refresh().await;

    gallery.open_upload();
    gallery.set_description("new");
    gallery.set_file(Some(png("new.png")));
    gallery.open_carousel(0);
    gallery.request_delete(1);

    let (uploaded, deleted) = futures::join!(gallery.submit_upload(), gallery.confirm_delete());

    assert!(uploaded.is_ok());
    assert!(deleted.is_ok());
    assert_eq!(shown(&gallery), gallery.backend().ids());
    assert_eq!(shown(&gallery), vec![2, 3]);
    assert!(!gallery.carousel().is_open());
}

#[tokio::test]
async fn observer_sees_every_transition() {
    let (gallery, _) = gallery(&[1]);
    let ticks = Rc::new(Cell::new(0));
    let counter = ticks.clone();
    gallery.set_observer(move || counter.set(counter.get() + 1));

    gallery.refresh().await;
    let after_refresh = ticks.get();
    assert!(after_refresh >= 1);

    gallery.open_carousel(0);
    gallery.next();
    gallery.close_carousel();

    assert_eq!(ticks.get(), after_refresh + 3);
}

#[tokio::test]
async fn display_url_uses_configured_base() {
    let gallery = Gallery::new(
        GalleryConfig::default().with_api_base_url("https://photos.example.org/"),
        MemoryBackend::with_photos(&[5]),
        Previews::default(),
    );
    gallery.refresh().await;

    let url = gallery.display_url(&gallery.photos()[0]);

    assert_eq!(url, "https://photos.example.org/uploads/5.png");
}
