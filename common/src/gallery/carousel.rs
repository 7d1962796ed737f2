use tracing::debug;

use api::photo::{Photo, PhotoUuid};

// the two listener scopes of the carousel modal
//
// the backdrop and the content are siblings, not parent and child, so an interaction is
// attributed to exactly one of them and never has to be stopped from bubbling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalRegion {
    Backdrop,
    Content,
}

// full screen, one at a time viewer over the photo sequence
//
// the sequence itself is owned by the coordinator, so every operation that depends on its
// length takes the current length as an argument
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    active: Option<usize>,
}

impl Carousel {
    pub fn new() -> Self {
        Carousel { active: None }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_photo<'a>(&self, photos: &'a [Photo]) -> Option<&'a Photo> {
        self.active.and_then(|index| photos.get(index))
    }

    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            debug!(index, len, "refusing to open carousel out of range");
            return false;
        }

        self.active = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn next(&mut self, len: usize) {
        self.step(len, |index| (index + 1) % len);
    }

    pub fn prev(&mut self, len: usize) {
        self.step(len, |index| (index + len - 1) % len);
    }

    // returns true if the click dismissed the carousel
    pub fn click(&mut self, region: ModalRegion) -> bool {
        match region {
            ModalRegion::Backdrop if self.is_open() => {
                self.close();
                true
            }
            _ => false,
        }
    }

    // re-find the previously viewed photo in a freshly loaded sequence
    //
    // positions are not stable across refreshes, so the lookup is by id; if the photo is
    // gone, the carousel closes
    pub fn reconcile(&mut self, previous: Option<PhotoUuid>, photos: &[Photo]) {
        if self.active.is_none() {
            return;
        }

        self.active = previous.and_then(|id| photos.iter().position(|p| p.id == id));

        if self.active.is_none() {
            debug!(?previous, "viewed photo is gone, closing carousel");
        }
    }

    fn step(&mut self, len: usize, f: impl Fn(usize) -> usize) {
        if let Some(index) = self.active {
            if len == 0 {
                self.active = None;
            } else {
                self.active = Some(f(index.min(len - 1)));
            }
        }
    }
}
