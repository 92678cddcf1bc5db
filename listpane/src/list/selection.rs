/// Per-row boolean marks, independent of the viewport and of the
/// current row. Reset to all-false whenever the list is replaced.
#[derive(Debug, Clone, Default)]
pub struct SelectionMask {
    marks: Vec<bool>,
}

impl SelectionMask {
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn reset(&mut self, len: usize) {
        self.marks = vec![false; len];
    }

    /// Flip the mark at `index`; returns the new value.
    pub fn toggle(&mut self, index: usize) -> bool {
        if let Some(mark) = self.marks.get_mut(index) {
            *mark = !*mark;
            *mark
        } else {
            false
        }
    }

    pub fn set(&mut self, index: usize, on: bool) {
        if let Some(mark) = self.marks.get_mut(index) {
            *mark = on;
        }
    }

    /// Out-of-range indices read as unselected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    pub fn any(&self) -> bool {
        self.marks.iter().any(|&m| m)
    }

    pub fn indices(&self) -> Vec<usize> {
        self.marks
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
            .collect()
    }
}
