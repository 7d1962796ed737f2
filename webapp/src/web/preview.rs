use gloo_console::error as console_error;
use web_sys::Url;

use crate::web::backend::SelectedFile;
use common::gallery::PreviewSource;

// object urls for picked files
//
// each one pins the file in memory until it is revoked, which is why the gallery keeps
// careful track of them
pub struct ObjectUrlPreviews;

impl PreviewSource for ObjectUrlPreviews {
    type File = SelectedFile;

    fn create(&self, file: &SelectedFile) -> anyhow::Result<String> {
        Url::create_object_url_with_blob(&file.0)
            .map_err(|err| anyhow::Error::msg(format!("failed to create object url: {err:?}")))
    }

    fn release(&self, handle: &str) {
        if let Err(err) = Url::revoke_object_url(handle) {
            console_error!(format!("Failed to revoke object url {handle}: {err:?}"));
        }
    }
}
