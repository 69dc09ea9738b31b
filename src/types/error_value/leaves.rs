use super::ErrorValue;
use crate::types::alloc_type::Vec;

/// Depth-first iterator over the leaves of an [`ErrorValue`].
///
/// Created by [`ErrorValue::leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<&'a ErrorValue>,
}

impl<'a> Leaves<'a> {
    pub(super) fn new(root: &'a ErrorValue) -> Self {
        let mut stack = Vec::with_capacity(4);
        stack.push(root);
        Self { stack }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a ErrorValue;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                ErrorValue::Simple(_) => return Some(node),
                // reversed so the first child is popped first
                ErrorValue::Composite(set) => self.stack.extend(set.children().iter().rev()),
            }
        }
        None
    }
}

impl core::iter::FusedIterator for Leaves<'_> {}
