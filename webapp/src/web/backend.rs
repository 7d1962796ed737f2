use async_trait::async_trait;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use api::photo::{Photo, PhotoNotFound, PhotoUuid, delete_photo, list_photos, upload_photo};
use common::{
    config::GalleryConfig,
    gallery::{DraftFile, GalleryError, PhotoBackend},
};

// a file picked in an <input type=file>
#[derive(Clone, Debug)]
pub struct SelectedFile(pub File);

impl DraftFile for SelectedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

// the first file of the input with the given id, if anything is picked
pub fn selected_file(input_id: &str) -> Option<SelectedFile> {
    let input = web_sys::window()?
        .document()?
        .get_element_by_id(input_id)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;

    input.files()?.get(0).map(SelectedFile)
}

// the photo api over http
pub struct HttpBackend {
    api_base_url: String,
}

impl HttpBackend {
    pub fn new(config: &GalleryConfig) -> Self {
        HttpBackend {
            api_base_url: config.api_base_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl PhotoBackend for HttpBackend {
    type File = SelectedFile;

    async fn list_photos(&self) -> Result<Vec<Photo>, GalleryError> {
        let resp = list_photos(&self.api_base_url).await?;

        debug!(count = resp.photos.len(), "listed photos");
        Ok(resp.photos)
    }

    async fn upload_photo(
        &self,
        description: &str,
        file: &SelectedFile,
    ) -> Result<Option<Photo>, GalleryError> {
        Ok(upload_photo(&self.api_base_url, description, &file.0)
            .await?
            .photo)
    }

    async fn delete_photo(&self, photo_uuid: PhotoUuid) -> Result<(), GalleryError> {
        match delete_photo(&self.api_base_url, photo_uuid).await {
            Ok(_) => Ok(()),
            Err(err) => match err.downcast_ref::<PhotoNotFound>() {
                Some(PhotoNotFound(msg)) => Err(GalleryError::NotFound(msg.clone())),
                None => Err(err.into()),
            },
        }
    }
}
