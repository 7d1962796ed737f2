use async_trait::async_trait;

use crate::gallery::GalleryError;
use api::photo::{Photo, PhotoUuid};

// whatever the user picked in the file input
//
// the core never looks at the bytes; it only needs enough to label the selection and to
// check it against the accepted types
pub trait DraftFile: Clone {
    fn name(&self) -> String;

    fn mime_type(&self) -> String;
}

// these are the photo api calls the gallery depends on
//
// browser futures are not Send, hence ?Send
#[async_trait(?Send)]
pub trait PhotoBackend {
    type File: DraftFile;

    // server-ordered, never re-sorted by the caller
    async fn list_photos(&self) -> Result<Vec<Photo>, GalleryError>;

    // the created record, when the server reports it
    async fn upload_photo(
        &self,
        description: &str,
        file: &Self::File,
    ) -> Result<Option<Photo>, GalleryError>;

    async fn delete_photo(&self, photo_uuid: PhotoUuid) -> Result<(), GalleryError>;
}

// transient, locally resolvable references to a selected file (object urls in the browser)
//
// every handle returned by create() must eventually be passed to release() exactly once;
// PreviewSlot is the only caller and enforces that
pub trait PreviewSource {
    type File: DraftFile;

    fn create(&self, file: &Self::File) -> anyhow::Result<String>;

    fn release(&self, handle: &str);
}
