use crate::error::Result;
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::list::columns::ColumnSpec;
use crate::list::render::{row_attr, MultiColumn, RowRenderer, SingleColumn};
use crate::list::selection::SelectionMask;
use crate::list::viewport::{Change, Viewport};
use crate::surface::Rect;
use crate::terminal::Screen;

/// A scrollable, selectable list widget.
///
/// Owns the viewport state machine, the selection mask and a renderer;
/// maps input events to navigation and selection commands, repaints only
/// the rows whose visual state changed, and issues exactly one screen
/// flush per consumed event.
///
/// One pane instance is owned and driven by exactly one event loop; it
/// shares no state with other widgets.
pub struct ListPane<R: RowRenderer> {
    renderer: R,
    view: Viewport,
    selection: SelectionMask,
}

impl ListPane<SingleColumn> {
    /// Single-column list over plain strings.
    pub fn single(rows: Vec<String>) -> Self {
        Self::new(SingleColumn::new(rows))
    }
}

impl ListPane<MultiColumn> {
    /// Multi-column list; every row must have exactly `spec.len()`
    /// fields.
    pub fn multi(rows: Vec<Vec<String>>, spec: ColumnSpec) -> Result<Self> {
        Ok(Self::new(MultiColumn::new(rows, spec)?))
    }
}

impl<R: RowRenderer> ListPane<R> {
    pub fn new(renderer: R) -> Self {
        let row_count = renderer.row_count();
        Self {
            renderer,
            view: Viewport::new(row_count, 0),
            selection: SelectionMask::new(row_count),
        }
    }

    pub fn current_index(&self) -> usize {
        self.view.current()
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.indices()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.view
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Lay the widget out in `area` and paint it completely. Call once
    /// after construction and again on every terminal resize; column
    /// widths are re-resolved and the viewport re-clamped here.
    pub fn layout_and_draw<S: Screen>(&mut self, screen: &mut S, area: Rect) -> Result<()> {
        self.renderer.layout(area)?;
        self.view.resize(self.renderer.viewport().height as usize);
        let buf = screen.buffer_mut();
        self.renderer.draw_chrome(buf);
        self.renderer.draw_window(buf, &self.view, &self.selection);
        screen.flush()?;
        Ok(())
    }

    /// Replace the list wholesale. Resets the viewport to the top and
    /// the selection to all-false, then repaints.
    pub fn replace_data<S: Screen>(&mut self, screen: &mut S, rows: Vec<R::Row>) -> Result<()> {
        self.renderer.set_rows(rows)?;
        let row_count = self.renderer.row_count();
        self.view
            .reset(row_count, self.renderer.viewport().height as usize);
        self.selection.reset(row_count);
        self.renderer
            .draw_window(screen.buffer_mut(), &self.view, &self.selection);
        screen.flush()?;
        Ok(())
    }

    /// Dispatch one input event.
    ///
    /// Returns `Ok(true)` when the event was recognized and consumed.
    /// Enter deliberately returns `Ok(false)` even though it may mark the
    /// current row: committing is the embedding application's cue to act
    /// on [`selected_indices`](Self::selected_indices), so the key is
    /// left for it to handle too. Space (toggle plus auto-advance) is
    /// fully internal and returns `Ok(true)`.
    pub fn handle_input<S: Screen>(&mut self, screen: &mut S, event: &Event) -> Result<bool> {
        match *event {
            Event::Key { key, modifiers } => self.handle_key(screen, key, modifiers),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(screen, x, y),
            Event::Click { .. } => Ok(false),
            Event::Scroll { delta_y, .. } => {
                let change = if delta_y < 0 {
                    self.view.scroll_up()
                } else {
                    self.view.scroll_down()
                };
                self.apply(screen, change)?;
                Ok(true)
            }
            // The embedding application re-lays the widget out.
            Event::Resize { .. } => Ok(false),
        }
    }

    fn handle_key<S: Screen>(
        &mut self,
        screen: &mut S,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<bool> {
        let plain = !modifiers.ctrl && !modifiers.alt;
        let change = match key {
            Key::Up => self.view.move_up(),
            Key::Down => self.view.move_down(),
            Key::Char('k') if plain => self.view.move_up(),
            Key::Char('j') if plain => self.view.move_down(),
            Key::PageUp => self.view.page_up(),
            Key::PageDown => self.view.page_down(),
            Key::Home => self.view.home(),
            Key::End => self.view.end(),
            Key::Char('G') if plain => self.view.end(),
            Key::Char(' ') if plain => {
                self.toggle_selection(screen)?;
                return Ok(true);
            }
            Key::Enter => {
                self.commit(screen)?;
                return Ok(false);
            }
            _ => return Ok(false),
        };
        self.apply(screen, change)?;
        Ok(true)
    }

    fn handle_click<S: Screen>(&mut self, screen: &mut S, x: u16, y: u16) -> Result<bool> {
        if !self.renderer.area().contains(x, y) {
            return Ok(false);
        }
        let inner = self.renderer.viewport();
        let line = y.saturating_sub(inner.y) as usize;
        let change = self.view.click(line);
        self.apply(screen, change)?;
        Ok(true)
    }

    /// Flip the current row's mark, then advance like a down-arrow; at
    /// the very last row, repaint in place so the marker shows.
    fn toggle_selection<S: Screen>(&mut self, screen: &mut S) -> Result<()> {
        if self.view.row_count() == 0 {
            return Ok(());
        }
        let toggled = self.view.current();
        self.selection.toggle(toggled);
        match self.view.move_down() {
            Change::None => {
                let attr = row_attr(&self.view, &self.selection, toggled);
                self.renderer
                    .draw_row(screen.buffer_mut(), &self.view, toggled, attr);
                screen.flush()?;
                Ok(())
            }
            change => self.apply(screen, change),
        }
    }

    /// Guarantee at least one mark exists: an all-false mask marks the
    /// current row. Never clears an existing mark, never moves the
    /// viewport.
    fn commit<S: Screen>(&mut self, screen: &mut S) -> Result<()> {
        if self.view.row_count() == 0 || self.selection.any() {
            return Ok(());
        }
        let current = self.view.current();
        self.selection.set(current, true);
        let attr = row_attr(&self.view, &self.selection, current);
        self.renderer
            .draw_row(screen.buffer_mut(), &self.view, current, attr);
        screen.flush()?;
        Ok(())
    }

    /// Repaint what a navigation command changed, then flush once. A
    /// boundary no-op paints nothing and does not flush.
    fn apply<S: Screen>(&mut self, screen: &mut S, change: Change) -> Result<()> {
        match change {
            Change::None => Ok(()),
            Change::Current { old, new } => {
                let buf = screen.buffer_mut();
                self.renderer
                    .draw_row(buf, &self.view, old, row_attr(&self.view, &self.selection, old));
                self.renderer
                    .draw_row(buf, &self.view, new, row_attr(&self.view, &self.selection, new));
                screen.flush()?;
                Ok(())
            }
            Change::Window => {
                self.renderer
                    .draw_window(screen.buffer_mut(), &self.view, &self.selection);
                screen.flush()?;
                Ok(())
            }
        }
    }
}
