//! Ground-sample-distance lookup.
//!
//! A GSD entry gives the physical width and height of one image pixel in
//! meters. The labeling tool resolves it per image so box size labels can be
//! shown in meters instead of pixels. Resolution is explicitly fallible:
//! [`GsdResolver::resolve`] returns `None` on a miss and the paint path
//! degrades to pixel units, it never propagates an error.

use std::collections::HashMap;

/// Per-pixel physical extent, in meters per pixel along each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gsd {
    pub width: f64,
    pub height: f64,
}

impl Gsd {
    pub fn new(width: f64, height: f64) -> Gsd {
        Gsd { width, height }
    }
}

/// Resolves the ground-sample distance for an image, if known.
pub trait GsdResolver {
    fn resolve(&self, image: &str) -> Option<Gsd>;
}

/// In-memory GSD table keyed by image name.
#[derive(Clone, Debug, Default)]
pub struct GsdTable {
    entries: HashMap<String, Gsd>,
}

impl GsdTable {
    pub fn new() -> GsdTable {
        GsdTable::default()
    }

    pub fn insert(&mut self, image: impl Into<String>, gsd: Gsd) {
        self.entries.insert(image.into(), gsd);
    }

    pub fn get(&self, image: &str) -> Option<Gsd> {
        self.entries.get(image).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GsdResolver for GsdTable {
    fn resolve(&self, image: &str) -> Option<Gsd> {
        self.get(image)
    }
}

/// Resolver for hosts without geo data; every lookup misses.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoGsd;

impl GsdResolver for NoGsd {
    fn resolve(&self, _image: &str) -> Option<Gsd> {
        None
    }
}
