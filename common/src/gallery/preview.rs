use std::rc::Rc;

use tracing::{debug, warn};

use crate::gallery::backend::PreviewSource;

// holds at most one live preview handle
//
// a new selection (present or absent) always releases the previous handle first, and
// dropping the slot releases whatever is left, so a draft can never leak a handle
pub struct PreviewSlot<S: PreviewSource> {
    source: Rc<S>,
    handle: Option<String>,
}

impl<S: PreviewSource> PreviewSlot<S> {
    pub fn new(source: Rc<S>) -> Self {
        PreviewSlot {
            source,
            handle: None,
        }
    }

    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }

    pub fn set_selection(&mut self, file: Option<&S::File>) -> Option<&str> {
        self.release();

        if let Some(file) = file {
            // a missing preview is cosmetic, the file itself is still selected
            match self.source.create(file) {
                Ok(handle) => {
                    debug!(handle = %handle, "created preview handle");
                    self.handle = Some(handle);
                }
                Err(err) => warn!("failed to create preview handle: {err}"),
            }
        }

        self.handle()
    }

    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(handle = %handle, "releasing preview handle");
            self.source.release(&handle);
        }
    }
}

impl<S: PreviewSource> Drop for PreviewSlot<S> {
    fn drop(&mut self) {
        self.release();
    }
}
