//! Process-wide model cache and load progress.
//!
//! Each url is built once into a shared template. Placements reuse it and
//! carry their own instance transform.

use fnv::FnvHashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct ModelCache<T> {
    templates: FnvHashMap<String, Rc<T>>,
}

impl<T> ModelCache<T> {
    pub fn new() -> Self {
        Self {
            templates: FnvHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.templates.contains_key(url)
    }

    /// Shared template for `url`, built with `build` on first request.
    pub fn template(&mut self, url: &str, build: impl FnOnce(&str) -> T) -> Rc<T> {
        if let Some(t) = self.templates.get(url) {
            return t.clone();
        }
        log::debug!("[assets] building template {url}");
        let t = Rc::new(build(url));
        self.templates.insert(url.to_string(), t.clone());
        t
    }
}

impl<T> Default for ModelCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts loaded models against the set a page needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: usize,
    pub total: usize,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self { loaded: 0, total }
    }

    /// Record one finished load; returns true when this completed the set.
    pub fn mark_loaded(&mut self) -> bool {
        if self.loaded >= self.total {
            return false;
        }
        self.loaded += 1;
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.loaded >= self.total
    }

    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.loaded * 100) / self.total).min(100) as u8
    }
}
