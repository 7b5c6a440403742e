//! Batch loading of resources from JSON inputs.
//!
//! A [`Loader`] accumulates the resources of several JSON array documents into
//! one ordered list, ahead of a bulk submission to the hub. Each input is
//! all-or-nothing: a document that fails to decode leaves the accumulated list
//! exactly as it was before the call.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::errors::LoadError;

/// Ordered, append-only accumulator of resources of type `T`.
#[derive(Debug, Clone)]
pub struct Loader<T> {
    resources: Vec<T>,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Loader<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resources: Vec::new(),
        }
    }

    /// Resources loaded so far, in input order.
    #[must_use]
    pub fn resources(&self) -> &[T] {
        &self.resources
    }

    /// Consume the loader and return its resources.
    #[must_use]
    pub fn into_resources(self) -> Vec<T> {
        self.resources
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl<T: DeserializeOwned> Loader<T> {
    /// Decode one JSON array document from `reader` and append its elements.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Decode`] if the input is not exactly one JSON
    /// array of `T`. Nothing from the failed input is appended.
    pub fn load_json<R: Read>(&mut self, reader: R) -> Result<(), LoadError> {
        let batch: Vec<T> = serde_json::from_reader(reader)?;
        self.resources.extend(batch);
        Ok(())
    }

    /// [`load_json`](Self::load_json) over an in-memory document.
    ///
    /// # Errors
    ///
    /// Same as [`load_json`](Self::load_json).
    pub fn load_json_slice(&mut self, input: &[u8]) -> Result<(), LoadError> {
        let batch: Vec<T> = serde_json::from_slice(input)?;
        self.resources.extend(batch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;
    use crate::entities::Trackable;
    use crate::enums::TrackableType;

    #[test]
    fn empty_loader_has_no_resources() {
        let loader = Loader::<Trackable>::new();
        assert!(loader.is_empty());
        assert!(loader.into_resources().is_empty());
    }

    #[test]
    fn empty_array_is_valid() {
        let mut loader = Loader::<Trackable>::new();
        loader.load_json("[]".as_bytes()).unwrap();
        assert_eq!(loader.len(), 0);
    }

    #[test]
    fn inputs_are_concatenated_in_order() {
        let mut loader = Loader::<u32>::new();
        loader.load_json("[3, 1, 2]".as_bytes()).unwrap();
        loader.load_json_slice(b"[9, 8]").unwrap();
        assert_eq!(loader.resources(), &[3, 1, 2, 9, 8]);
    }

    #[test]
    fn failed_input_keeps_earlier_batches() {
        let mut loader = Loader::<u32>::new();
        loader.load_json("[1, 2]".as_bytes()).unwrap();

        let err = loader.load_json("[3, \"four\", 5]".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
        assert_eq!(loader.resources(), &[1, 2]);
    }

    #[test]
    fn single_object_is_not_an_array() {
        let mut loader = Loader::<Trackable>::new();
        let err = loader
            .load_json(r#"{"type": "omlox", "name": "solo"}"#.as_bytes())
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to decode resources"));
    }

    #[test]
    fn trailing_document_is_rejected() {
        let mut loader = Loader::<u32>::new();
        assert!(loader.load_json("[1] [2]".as_bytes()).is_err());
        assert!(loader.is_empty());
    }

    #[test]
    fn loads_trackables_from_files() {
        let first_id = Uuid::new_v4();
        let second_id = Uuid::new_v4();

        let mut first = tempfile::NamedTempFile::new().unwrap();
        write!(
            first,
            r#"[{{"id": "{first_id}", "type": "omlox", "name": "a"}}]"#
        )
        .unwrap();
        let mut second = tempfile::NamedTempFile::new().unwrap();
        write!(
            second,
            r#"[{{"id": "{second_id}", "type": "virtual", "name": "b"}}]"#
        )
        .unwrap();

        let mut loader = Loader::<Trackable>::new();
        for file in [&first, &second] {
            loader.load_json(std::fs::File::open(file.path()).unwrap()).unwrap();
        }

        let resources = loader.into_resources();
        assert_eq!(
            resources,
            vec![
                Trackable::new(first_id, TrackableType::Omlox, "a"),
                Trackable::new(second_id, TrackableType::Virtual, "b"),
            ]
        );
    }
}
