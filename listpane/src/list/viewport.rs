/// What a navigation command changed, and therefore how much must be
/// repainted before the next flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Boundary no-op; nothing to repaint, nothing to flush.
    None,
    /// The highlight moved within the visible window; repaint exactly
    /// these two rows.
    Current { old: usize, new: usize },
    /// The window itself shifted; repaint the whole visible range.
    Window,
}

impl Change {
    pub fn is_none(&self) -> bool {
        matches!(self, Change::None)
    }
}

/// The viewport/selection navigation state machine. Pure state, no
/// drawing.
///
/// Invariants, whenever `row_count > 0` and `line_count > 0`:
///
/// - `offset <= current < offset + line_count`
/// - `offset + line_count <= row_count`, except `offset = 0` when
///   `row_count <= line_count`.
///
/// Every operation preserves them; violations are programming errors and
/// are caught by debug assertions, not reported at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    current: usize,
    line_count: usize,
    row_count: usize,
}

impl Viewport {
    /// `height` is the number of rows the surface can show at once.
    pub fn new(row_count: usize, height: usize) -> Self {
        Self {
            offset: 0,
            current: 0,
            line_count: row_count.min(height),
            row_count,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.line_count
    }

    /// Wholesale data replacement: back to the top, window re-derived.
    pub fn reset(&mut self, row_count: usize, height: usize) {
        *self = Viewport::new(row_count, height);
    }

    /// Re-derive `line_count` after the surface changed size, re-clamping
    /// `offset` and `current` so the invariants hold when the window
    /// shrank.
    pub fn resize(&mut self, height: usize) {
        self.line_count = self.row_count.min(height);
        if self.row_count == 0 || self.line_count == 0 {
            self.offset = 0;
            self.current = self.current.min(self.row_count.saturating_sub(1));
            return;
        }
        if self.offset + self.line_count > self.row_count {
            self.offset = self.row_count - self.line_count;
        }
        if self.current >= self.offset + self.line_count {
            self.current = self.offset + self.line_count - 1;
        }
        if self.current < self.offset {
            self.current = self.offset;
        }
        self.check();
    }

    fn ready(&self) -> bool {
        self.row_count > 0 && self.line_count > 0
    }

    fn bottom_line(&self) -> usize {
        self.offset + self.line_count - 1
    }

    fn check(&self) {
        debug_assert!(self.offset <= self.current);
        debug_assert!(self.current < self.offset + self.line_count);
        debug_assert!(
            self.offset + self.line_count <= self.row_count,
            "window extends past the last row"
        );
        debug_assert!(self.row_count > self.line_count || self.offset == 0);
    }

    pub fn move_up(&mut self) -> Change {
        if !self.ready() {
            return Change::None;
        }
        if self.current > self.offset {
            self.current -= 1;
            self.check();
            Change::Current {
                old: self.current + 1,
                new: self.current,
            }
        } else if self.offset > 0 {
            self.offset -= 1;
            self.current -= 1;
            self.check();
            Change::Window
        } else {
            Change::None
        }
    }

    pub fn move_down(&mut self) -> Change {
        if !self.ready() {
            return Change::None;
        }
        if self.current < self.bottom_line() {
            self.current += 1;
            self.check();
            Change::Current {
                old: self.current - 1,
                new: self.current,
            }
        } else if self.offset + self.line_count < self.row_count {
            self.offset += 1;
            self.current += 1;
            self.check();
            Change::Window
        } else {
            Change::None
        }
    }

    /// First to the top of the page, then a full page (or to the very top
    /// when less than a page remains above).
    pub fn page_up(&mut self) -> Change {
        if !self.ready() {
            return Change::None;
        }
        if self.current > self.offset {
            let old = self.current;
            self.current = self.offset;
            self.check();
            Change::Current {
                old,
                new: self.current,
            }
        } else if self.offset > 0 {
            if self.offset > self.line_count {
                self.offset -= self.line_count;
                self.current -= self.line_count;
            } else {
                self.offset = 0;
                self.current = 0;
            }
            self.check();
            Change::Window
        } else {
            Change::None
        }
    }

    /// Symmetric to [`page_up`](Self::page_up): first to the bottom of
    /// the page, then a full page down, clamping the window's bottom to
    /// the last row when less than a full page remains.
    pub fn page_down(&mut self) -> Change {
        if !self.ready() {
            return Change::None;
        }
        if self.current < self.bottom_line() {
            let old = self.current;
            self.current = self.bottom_line();
            self.check();
            Change::Current {
                old,
                new: self.current,
            }
        } else if self.offset + self.line_count < self.row_count {
            if self.offset + self.line_count * 2 < self.row_count {
                self.offset += self.line_count;
                self.current += self.line_count;
            } else {
                self.offset = self.row_count - self.line_count;
                self.current = self.row_count - 1;
            }
            self.check();
            Change::Window
        } else {
            Change::None
        }
    }

    pub fn home(&mut self) -> Change {
        if !self.ready() || (self.offset == 0 && self.current == 0) {
            return Change::None;
        }
        if self.offset == 0 {
            let old = self.current;
            self.current = 0;
            self.check();
            Change::Current { old, new: 0 }
        } else {
            self.offset = 0;
            self.current = 0;
            self.check();
            Change::Window
        }
    }

    pub fn end(&mut self) -> Change {
        if !self.ready() {
            return Change::None;
        }
        let last_offset = self.row_count - self.line_count;
        let last = self.row_count - 1;
        if self.offset == last_offset && self.current == last {
            return Change::None;
        }
        if self.offset == last_offset {
            let old = self.current;
            self.current = last;
            self.check();
            Change::Current { old, new: last }
        } else {
            self.offset = last_offset;
            self.current = last;
            self.check();
            Change::Window
        }
    }

    /// Move the highlight to the window-relative `line`. Lines past the
    /// last visible row clamp to it, so a click on blank trailing space
    /// below a short list lands on the final row.
    pub fn click(&mut self, line: usize) -> Change {
        if !self.ready() {
            return Change::None;
        }
        let index = self.offset + line.min(self.line_count - 1);
        if index == self.current {
            return Change::None;
        }
        let old = self.current;
        self.current = index;
        self.check();
        Change::Current { old, new: index }
    }

    /// One wheel tick toward the top of the list.
    pub fn scroll_up(&mut self) -> Change {
        self.move_up()
    }

    /// One wheel tick toward the bottom of the list.
    pub fn scroll_down(&mut self) -> Change {
        self.move_down()
    }
}
