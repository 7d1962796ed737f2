use tracing::{debug, error, warn};

use crate::gallery::GalleryError;
use api::photo::{Photo, PhotoUuid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletionState {
    Idle,
    // waiting for the user to consent
    Confirming(PhotoUuid),
    // the delete request is in flight
    Deleting(PhotoUuid),
}

// deletion of the photo currently shown in the carousel
//
// at most one delete is ever in flight; requests made while one is pending are dropped
#[derive(Debug)]
pub struct DeletionWorkflow {
    state: DeletionState,
    last_error: Option<GalleryError>,
}

impl Default for DeletionWorkflow {
    fn default() -> Self {
        DeletionWorkflow::new()
    }
}

impl DeletionWorkflow {
    pub fn new() -> Self {
        DeletionWorkflow {
            state: DeletionState::Idle,
            last_error: None,
        }
    }

    pub fn state(&self) -> DeletionState {
        self.state
    }

    pub fn target(&self) -> Option<PhotoUuid> {
        match self.state {
            DeletionState::Idle => None,
            DeletionState::Confirming(id) | DeletionState::Deleting(id) => Some(id),
        }
    }

    pub fn confirming(&self) -> bool {
        matches!(self.state, DeletionState::Confirming(_))
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.state, DeletionState::Deleting(_))
    }

    pub fn last_error(&self) -> Option<&GalleryError> {
        self.last_error.as_ref()
    }

    // ask for consent to delete a photo; only the photo being viewed can be deleted
    pub fn request(&mut self, photo_uuid: PhotoUuid, active: Option<&Photo>) -> bool {
        if self.in_flight() {
            debug!(photo_uuid, "delete already in flight, ignoring request");
            return false;
        }

        match active {
            Some(photo) if photo.id == photo_uuid => {
                self.state = DeletionState::Confirming(photo_uuid);
                true
            }
            _ => {
                warn!(photo_uuid, "delete requested for a photo that is not being viewed");
                false
            }
        }
    }

    pub fn cancel(&mut self) -> bool {
        if self.confirming() {
            self.state = DeletionState::Idle;
            true
        } else {
            false
        }
    }

    // consent given; returns the photo to delete if we were waiting for it
    pub fn begin(&mut self) -> Option<PhotoUuid> {
        match self.state {
            DeletionState::Confirming(photo_uuid) => {
                self.last_error = None;
                self.state = DeletionState::Deleting(photo_uuid);
                Some(photo_uuid)
            }
            _ => None,
        }
    }

    // apply the result of the delete request; returns true when the gallery should refresh
    pub fn finish(&mut self, result: Result<(), GalleryError>) -> bool {
        let photo_uuid = match self.state {
            DeletionState::Deleting(photo_uuid) => photo_uuid,
            _ => {
                warn!("discarding delete result, no delete in flight");
                return false;
            }
        };

        self.state = DeletionState::Idle;

        match result {
            Ok(()) => true,
            Err(err) => {
                // nothing is retried automatically, the user can ask again
                error!(photo_uuid, "failed to delete photo: {err}");
                self.last_error = Some(err);
                false
            }
        }
    }
}
