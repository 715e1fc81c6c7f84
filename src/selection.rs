use slint::VecModel;
use std::collections::HashSet;

/// Result of the last lasso gesture.
///
/// Keeps node IDs in the order the host listed them, without duplicates,
/// so repeated queries over the same gesture return the same sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LassoSelection {
    selected: Vec<i32>,
    members: HashSet<i32>,
}

impl LassoSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the current selection
    pub fn clear(&mut self) {
        self.selected.clear();
        self.members.clear();
    }

    /// Replace the current selection with a new set of IDs
    ///
    /// The first occurrence of each ID wins.
    pub fn replace_selection<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = i32>,
    {
        self.clear();
        for id in ids {
            if self.members.insert(id) {
                self.selected.push(id);
            }
        }
    }

    /// Check if an ID is selected
    pub fn contains(&self, id: i32) -> bool {
        self.members.contains(&id)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.selected
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.selected.iter()
    }

    /// Replace the contents of a Slint `VecModel` with the selection.
    pub fn sync_to_model(&self, model: &VecModel<i32>) {
        model.set_vec(self.selected.clone());
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
