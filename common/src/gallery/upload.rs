use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::GalleryConfig;
use crate::gallery::{
    GalleryError,
    backend::{DraftFile, PreviewSource},
    preview::PreviewSlot,
};

pub const NO_FILE_SELECTED: &str = "no file selected";
pub const DESCRIPTION_REQUIRED: &str = "description is required";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadState {
    // the upload surface is closed and there is no draft
    Idle,
    // the surface is open; a failed submission also lands here
    Editing,
    // the upload request is in flight
    Submitting,
}

// everything the upload request needs, copied out of the draft so that no borrow of the
// workflow is held while the request is pending
#[derive(Clone, Debug)]
pub struct PendingUpload<F> {
    pub description: String,
    pub file: F,
}

// the new-photo form
//
// the draft (description, file, preview, error) lives exactly as long as the surface is
// open: it is created by open() and destroyed by close() or a successful submission
pub struct UploadWorkflow<S: PreviewSource> {
    state: UploadState,
    description: String,
    file: Option<S::File>,
    preview: PreviewSlot<S>,
    error: Option<GalleryError>,
}

impl<S: PreviewSource> UploadWorkflow<S> {
    pub fn new(previews: Rc<S>) -> Self {
        UploadWorkflow {
            state: UploadState::Idle,
            description: String::new(),
            file: None,
            preview: PreviewSlot::new(previews),
            error: None,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != UploadState::Idle
    }

    pub fn submitting(&self) -> bool {
        self.state == UploadState::Submitting
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn file(&self) -> Option<&S::File> {
        self.file.as_ref()
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.as_ref().map(|file| file.name())
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.handle()
    }

    pub fn error(&self) -> Option<&GalleryError> {
        self.error.as_ref()
    }

    pub fn open(&mut self) {
        if self.state == UploadState::Idle {
            self.reset();
            self.state = UploadState::Editing;
        }
    }

    pub fn set_description(&mut self, text: impl Into<String>) -> bool {
        if self.state != UploadState::Editing {
            return false;
        }

        self.description = text.into();
        true
    }

    pub fn set_file(&mut self, file: Option<S::File>) -> bool {
        if self.state != UploadState::Editing {
            return false;
        }

        self.preview.set_selection(file.as_ref());
        self.file = file;
        true
    }

    // check the draft and, if it is complete, move to Submitting
    //
    // validation failures are recorded on the draft and never reach the network
    pub fn begin_submit(
        &mut self,
        config: &GalleryConfig,
    ) -> Result<PendingUpload<S::File>, GalleryError> {
        match self.state {
            UploadState::Editing => {}
            UploadState::Submitting => {
                return Err(GalleryError::validation("upload already in progress"));
            }
            UploadState::Idle => return Err(GalleryError::validation("upload form is closed")),
        }

        let file = match &self.file {
            Some(file) => file.clone(),
            None => return Err(self.reject(NO_FILE_SELECTED)),
        };

        if self.description.trim().is_empty() {
            return Err(self.reject(DESCRIPTION_REQUIRED));
        }

        // browsers leave the type blank for files they don't recognize; the server decides those
        let mime_type = file.mime_type();
        if !mime_type.is_empty() && !config.accepts(&mime_type) {
            return Err(self.reject(format!("unsupported file type: {mime_type}")));
        }

        self.error = None;
        self.state = UploadState::Submitting;

        Ok(PendingUpload {
            description: self.description.clone(),
            file,
        })
    }

    // apply the result of the upload request; returns true when the gallery should refresh
    pub fn finish_submit(&mut self, result: Result<(), GalleryError>) -> bool {
        if self.state != UploadState::Submitting {
            warn!("discarding upload result, no submission in flight");
            return false;
        }

        match result {
            Ok(()) => {
                debug!("upload succeeded, discarding draft");
                self.reset();
                self.state = UploadState::Idle;
                true
            }
            Err(err) => {
                // the description and file stay put so the user can simply retry
                self.error = Some(err);
                self.state = UploadState::Editing;
                false
            }
        }
    }

    // closing while a request is in flight is refused; the form disables its close
    // affordances in that state
    pub fn close(&mut self) -> bool {
        if self.state == UploadState::Submitting {
            warn!("refusing to close the upload form while submitting");
            return false;
        }

        self.reset();
        self.state = UploadState::Idle;
        true
    }

    fn reject(&mut self, msg: impl Into<String>) -> GalleryError {
        let err = GalleryError::validation(msg);
        self.error = Some(err.clone());
        err
    }

    fn reset(&mut self) {
        self.description.clear();
        self.file = None;
        self.preview.release();
        self.error = None;
    }
}
