use std::cell::{Ref, RefCell};
use std::rc::Rc;

use futures::lock::Mutex;
use tracing::{Level, debug, error, info, instrument, warn};

use crate::config::GalleryConfig;
use api::photo::{Photo, PhotoUuid, display_url};

pub mod backend;
pub use backend::{DraftFile, PhotoBackend, PreviewSource};

pub mod carousel;
pub use carousel::{Carousel, ModalRegion};

pub mod deletion;
pub use deletion::{DeletionState, DeletionWorkflow};

pub mod error;
pub use error::GalleryError;

pub mod preview;
pub use preview::PreviewSlot;

pub mod upload;
pub use upload::{UploadState, UploadWorkflow};

// gallery coordinator
//
// this owns the canonical photo sequence and the four workflows that act on it.  the whole
// thing runs on a single thread: each workflow sits in its own RefCell, and no borrow is ever
// held across an await, so an upload and a delete can be pending at the same time.
//
// the workflows never touch the sequence themselves.  a successful mutation only asks for a
// refresh, which re-reads the full list and swaps it in; refreshes are serialized, and since
// each one reads the current server state, overlapping refreshes converge on the same result.
pub struct Gallery<B, S>
where
    B: PhotoBackend,
    S: PreviewSource<File = B::File>,
{
    config: GalleryConfig,
    backend: B,
    photos: RefCell<Vec<Photo>>,
    list_error: RefCell<Option<GalleryError>>,
    upload: RefCell<UploadWorkflow<S>>,
    carousel: RefCell<Carousel>,
    deletion: RefCell<DeletionWorkflow>,
    refresh_lock: Mutex<()>,
    observer: RefCell<Option<Rc<dyn Fn()>>>,
}

impl<B, S> Gallery<B, S>
where
    B: PhotoBackend,
    S: PreviewSource<File = B::File>,
{
    pub fn new(config: GalleryConfig, backend: B, previews: S) -> Self {
        Gallery {
            config,
            backend,
            photos: RefCell::new(Vec::new()),
            list_error: RefCell::new(None),
            upload: RefCell::new(UploadWorkflow::new(Rc::new(previews))),
            carousel: RefCell::new(Carousel::new()),
            deletion: RefCell::new(DeletionWorkflow::new()),
            refresh_lock: Mutex::new(()),
            observer: RefCell::new(None),
        }
    }

    // called after every state transition, e.g. to poke a ui signal
    pub fn set_observer(&self, observer: impl Fn() + 'static) {
        *self.observer.borrow_mut() = Some(Rc::new(observer));
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn display_url(&self, photo: &Photo) -> String {
        display_url(&self.config.api_base_url, &photo.image_path)
    }

    // read access for the ui
    pub fn photos(&self) -> Ref<'_, Vec<Photo>> {
        self.photos.borrow()
    }

    pub fn list_error(&self) -> Option<GalleryError> {
        self.list_error.borrow().clone()
    }

    pub fn upload(&self) -> Ref<'_, UploadWorkflow<S>> {
        self.upload.borrow()
    }

    pub fn carousel(&self) -> Carousel {
        self.carousel.borrow().clone()
    }

    pub fn deletion(&self) -> Ref<'_, DeletionWorkflow> {
        self.deletion.borrow()
    }

    pub fn active_photo(&self) -> Option<Photo> {
        let photos = self.photos.borrow();
        self.carousel.borrow().active_photo(&photos).cloned()
    }

    // re-read the whole sequence and swap it in
    //
    // a failed listing is shown as an empty gallery plus a status message; it is never fatal
    #[instrument(level=Level::DEBUG, skip(self))]
    pub async fn refresh(&self) {
        let _guard = self.refresh_lock.lock().await;

        let (photos, list_error) = match self.backend.list_photos().await {
            Ok(photos) => (photos, None),
            Err(err) => {
                error!("failed to list photos: {err}");
                (Vec::new(), Some(err))
            }
        };

        debug!(count = photos.len(), "replacing photo sequence");

        {
            let mut current = self.photos.borrow_mut();
            let mut carousel = self.carousel.borrow_mut();
            let mut deletion = self.deletion.borrow_mut();

            let previous = carousel.active_photo(&current).map(|photo| photo.id);

            *current = photos;
            carousel.reconcile(previous, &current);

            // a pending confirmation only makes sense while its photo is still on screen
            if deletion.confirming()
                && carousel.active_photo(&current).map(|photo| photo.id) != deletion.target()
            {
                deletion.cancel();
            }

            *self.list_error.borrow_mut() = list_error;
        }

        self.notify();
    }

    // upload workflow

    pub fn open_upload(&self) {
        self.upload.borrow_mut().open();
        self.notify();
    }

    pub fn set_description(&self, text: impl Into<String>) -> bool {
        let changed = self.upload.borrow_mut().set_description(text);
        self.notify();
        changed
    }

    pub fn set_file(&self, file: Option<B::File>) -> bool {
        let changed = self.upload.borrow_mut().set_file(file);
        self.notify();
        changed
    }

    pub fn close_upload(&self) -> bool {
        let closed = self.upload.borrow_mut().close();
        self.notify();
        closed
    }

    #[instrument(level=Level::DEBUG, skip(self))]
    pub async fn submit_upload(&self) -> Result<(), GalleryError> {
        let pending = self.upload.borrow_mut().begin_submit(&self.config);
        self.notify();
        let pending = pending?;

        let result = match self
            .backend
            .upload_photo(&pending.description, &pending.file)
            .await
        {
            Ok(Some(photo)) => {
                info!(photo_uuid = photo.id, "uploaded photo");
                Ok(())
            }
            Ok(None) => {
                info!("uploaded photo");
                Ok(())
            }
            Err(err) => {
                warn!("upload failed: {err}");
                Err(err)
            }
        };

        let refresh = self.upload.borrow_mut().finish_submit(result.clone());
        self.notify();

        if refresh {
            self.refresh().await;
        }

        result
    }

    // carousel

    pub fn open_carousel(&self, index: usize) -> bool {
        let len = self.photos.borrow().len();
        let opened = self.carousel.borrow_mut().open(index, len);
        self.notify();
        opened
    }

    pub fn close_carousel(&self) {
        self.carousel.borrow_mut().close();
        self.deletion.borrow_mut().cancel();
        self.notify();
    }

    pub fn next(&self) {
        let len = self.photos.borrow().len();
        self.carousel.borrow_mut().next(len);
        self.deletion.borrow_mut().cancel();
        self.notify();
    }

    pub fn prev(&self) {
        let len = self.photos.borrow().len();
        self.carousel.borrow_mut().prev(len);
        self.deletion.borrow_mut().cancel();
        self.notify();
    }

    pub fn click(&self, region: ModalRegion) -> bool {
        let dismissed = self.carousel.borrow_mut().click(region);
        if dismissed {
            self.deletion.borrow_mut().cancel();
        }
        self.notify();
        dismissed
    }

    // deletion workflow

    pub fn request_delete(&self, photo_uuid: PhotoUuid) -> bool {
        let active = self.active_photo();
        let requested = self
            .deletion
            .borrow_mut()
            .request(photo_uuid, active.as_ref());
        self.notify();
        requested
    }

    pub fn cancel_delete(&self) -> bool {
        let cancelled = self.deletion.borrow_mut().cancel();
        self.notify();
        cancelled
    }

    #[instrument(level=Level::DEBUG, skip(self))]
    pub async fn confirm_delete(&self) -> Result<(), GalleryError> {
        let photo_uuid = match self.deletion.borrow_mut().begin() {
            Some(photo_uuid) => photo_uuid,
            None => return Err(GalleryError::validation("no delete awaiting confirmation")),
        };
        self.notify();

        let result = self.backend.delete_photo(photo_uuid).await;

        let refresh = self.deletion.borrow_mut().finish(result.clone());
        if refresh {
            info!(photo_uuid, "deleted photo");
            self.carousel.borrow_mut().close();
        }
        self.notify();

        if refresh {
            self.refresh().await;
        }

        result
    }

    fn notify(&self) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer();
        }
    }
}
