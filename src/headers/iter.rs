use std::iter::FusedIterator;
use std::vec;

/// Values stored under one header name, in insertion order.
///
/// This is a snapshot taken when
/// [`get_headers`](crate::FileItemHeaders::get_headers) was called; headers
/// added afterwards are not observed. Clone it to iterate more than once.
#[derive(Debug, Clone)]
pub struct Values {
    inner: vec::IntoIter<String>,
}

impl Values {
    pub(crate) fn new(values: Vec<String>) -> Self {
        Self { inner: values.into_iter() }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Vec::new())
    }
}

/// Distinct header names, in order of first insertion.
///
/// Snapshot semantics are the same as [`Values`].
#[derive(Debug, Clone)]
pub struct Names {
    inner: vec::IntoIter<String>,
}

impl Names {
    pub(crate) fn new(names: Vec<String>) -> Self {
        Self { inner: names.into_iter() }
    }
}

macro_rules! snapshot_iter {
    ($ty:ty) => {
        impl Iterator for $ty {
            type Item = String;

            fn next(&mut self) -> Option<String> {
                self.inner.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl DoubleEndedIterator for $ty {
            fn next_back(&mut self) -> Option<String> {
                self.inner.next_back()
            }
        }

        impl ExactSizeIterator for $ty {}

        impl FusedIterator for $ty {}
    };
}

snapshot_iter!(Values);
snapshot_iter!(Names);
