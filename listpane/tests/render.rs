use listpane::{
    row_attr, Attr, Buffer, ColumnSpec, ListPane, MultiColumn, Rect, RowRenderer, Screen,
    SelectionMask, SingleColumn, Surface, Viewport,
};

struct TestScreen {
    buffer: Buffer,
    flushes: usize,
}

impl TestScreen {
    fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            flushes: 0,
        }
    }

    /// The characters of one buffer row, trailing blanks trimmed.
    fn line(&self, y: u16) -> String {
        let mut s: String = (0..self.buffer.width())
            .map(|x| self.buffer.get(x, y).unwrap().ch)
            .collect();
        while s.ends_with(' ') {
            s.pop();
        }
        s
    }

    fn attr_at(&self, x: u16, y: u16) -> Attr {
        self.buffer.get(x, y).unwrap().attr
    }
}

impl Screen for TestScreen {
    fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

fn rows(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Surface primitives
// ============================================================================

#[test]
fn test_write_text_truncates_at_surface_edge() {
    let mut buf = Buffer::new(20, 3);
    let surface = Surface::new(Rect::new(0, 0, 5, 3));
    surface.write_text(&mut buf, 0, 0, "overflowing", Attr::NONE);
    let text: String = (0..6).map(|x| buf.get(x, 0).unwrap().ch).collect();
    assert_eq!(text, "overf ");
}

#[test]
fn test_write_text_is_wide_char_aware() {
    let mut buf = Buffer::new(20, 1);
    let surface = Surface::new(Rect::new(0, 0, 5, 1));
    // Each CJK glyph takes two cells; the third would split at the edge.
    surface.write_text(&mut buf, 0, 0, "日本語", Attr::NONE);
    assert_eq!(buf.get(0, 0).unwrap().ch, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.get(2, 0).unwrap().ch, '本');
    assert_eq!(buf.get(4, 0).unwrap().ch, ' ');
}

#[test]
fn test_writes_outside_surface_are_dropped() {
    let mut buf = Buffer::new(10, 10);
    let surface = Surface::new(Rect::new(2, 2, 3, 3));
    surface.write_char(&mut buf, 5, 0, 'x', Attr::NONE);
    surface.write_char(&mut buf, 0, 7, 'x', Attr::NONE);
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(buf.get(x, y).unwrap().ch, ' ');
        }
    }
}

#[test]
fn test_draw_border_uses_box_glyphs() {
    let mut buf = Buffer::new(10, 5);
    let surface = Surface::new(Rect::new(0, 0, 10, 5));
    surface.draw_border(&mut buf);
    assert_eq!(buf.get(0, 0).unwrap().ch, '┌');
    assert_eq!(buf.get(9, 0).unwrap().ch, '┐');
    assert_eq!(buf.get(0, 4).unwrap().ch, '└');
    assert_eq!(buf.get(9, 4).unwrap().ch, '┘');
    assert_eq!(buf.get(5, 0).unwrap().ch, '─');
    assert_eq!(buf.get(0, 2).unwrap().ch, '│');
}

#[test]
fn test_buffer_diff_reports_only_changes() {
    let mut a = Buffer::new(4, 2);
    let b = a.clone();
    a.set(2, 1, listpane::Cell::new('x'));
    let changes: Vec<_> = a.diff(&b).map(|(x, y, c)| (x, y, c.ch)).collect();
    assert_eq!(changes, vec![(2, 1, 'x')]);
}

// ============================================================================
// Single-column renderer
// ============================================================================

#[test]
fn test_single_column_draws_visible_window() {
    let mut screen = TestScreen::new(10, 3);
    let mut pane = ListPane::single(rows(&["alpha", "beta", "gamma", "delta"]));
    pane.layout_and_draw(&mut screen, Rect::from_size(10, 3)).unwrap();

    assert_eq!(screen.line(0), "alpha");
    assert_eq!(screen.line(1), "beta");
    assert_eq!(screen.line(2), "gamma");
    assert_eq!(screen.flushes, 1);
}

#[test]
fn test_current_row_carries_highlight_attr() {
    let mut screen = TestScreen::new(10, 3);
    let mut pane = ListPane::single(rows(&["alpha", "beta", "gamma"]));
    pane.layout_and_draw(&mut screen, Rect::from_size(10, 3)).unwrap();

    assert!(screen.attr_at(0, 0).contains(Attr::CURRENT));
    assert!(!screen.attr_at(0, 1).contains(Attr::CURRENT));
}

#[test]
fn test_current_and_selected_attrs_combine() {
    let view = Viewport::new(3, 3);
    let mut selection = SelectionMask::new(3);
    selection.set(0, true);
    let attr = row_attr(&view, &selection, 0);
    assert!(attr.contains(Attr::CURRENT));
    assert!(attr.contains(Attr::SELECTED));
}

#[test]
fn test_out_of_range_draw_row_is_silent_noop() {
    let mut buf = Buffer::new(10, 3);
    let mut renderer = SingleColumn::new(rows(&["a", "b", "c", "d", "e"]));
    renderer.layout(Rect::from_size(10, 3)).unwrap();
    let view = Viewport::new(5, 3);

    // Rows 3 and 4 are below the window; nothing may change.
    renderer.draw_row(&mut buf, &view, 3, Attr::NONE);
    renderer.draw_row(&mut buf, &view, 4, Attr::NONE);
    let before = Buffer::new(10, 3);
    assert_eq!(buf.diff(&before).count(), 0);
}

#[test]
fn test_bordered_single_column_draws_inside_frame() {
    let mut screen = TestScreen::new(12, 5);
    let mut pane = ListPane::new(SingleColumn::new(rows(&["alpha", "beta"])).bordered(true));
    pane.layout_and_draw(&mut screen, Rect::from_size(12, 5)).unwrap();

    assert_eq!(screen.buffer.get(0, 0).unwrap().ch, '┌');
    assert_eq!(screen.buffer.get(1, 1).unwrap().ch, 'a');
    assert_eq!(screen.buffer.get(1, 2).unwrap().ch, 'b');
}

#[test]
fn test_window_shift_repaints_whole_range() {
    let mut screen = TestScreen::new(10, 3);
    let mut pane = ListPane::single(rows(&["r0", "r1", "r2", "r3", "r4"]));
    pane.layout_and_draw(&mut screen, Rect::from_size(10, 3)).unwrap();

    use listpane::{Event, Key, Modifiers};
    let down = Event::Key {
        key: Key::Down,
        modifiers: Modifiers::new(),
    };
    pane.handle_input(&mut screen, &down).unwrap();
    pane.handle_input(&mut screen, &down).unwrap();
    pane.handle_input(&mut screen, &down).unwrap(); // window shifts to rows 1..4

    assert_eq!(screen.line(0), "r1");
    assert_eq!(screen.line(1), "r2");
    assert_eq!(screen.line(2), "r3");
}

// ============================================================================
// Multi-column renderer
// ============================================================================

#[test]
fn test_multi_column_draws_cells_and_separators() {
    let mut screen = TestScreen::new(13, 2);
    let data = vec![
        vec!["one".to_string(), "1".to_string()],
        vec!["two".to_string(), "22".to_string()],
    ];
    let mut pane = ListPane::multi(data, ColumnSpec::new(vec![6, 0])).unwrap();
    pane.layout_and_draw(&mut screen, Rect::from_size(13, 2)).unwrap();

    assert_eq!(screen.buffer.get(0, 0).unwrap().ch, 'o');
    assert_eq!(screen.buffer.get(6, 0).unwrap().ch, '│');
    // Second column starts after the separator; "1" is a one-char cell.
    assert_eq!(screen.buffer.get(7, 0).unwrap().ch, '1');
    assert_eq!(screen.buffer.get(7, 1).unwrap().ch, '2');
}

#[test]
fn test_multi_column_cell_truncates_to_column_width() {
    let mut screen = TestScreen::new(9, 1);
    let data = vec![vec!["abcdefgh".to_string(), "x".to_string()]];
    let mut pane = ListPane::multi(data, ColumnSpec::new(vec![4, 0])).unwrap();
    pane.layout_and_draw(&mut screen, Rect::from_size(9, 1)).unwrap();

    assert_eq!(screen.line(0), "abcd│x");
}

#[test]
fn test_bordered_multi_column_connects_separator_with_tees() {
    let mut screen = TestScreen::new(14, 5);
    let data = vec![vec!["a".to_string(), "b".to_string()]];
    let mut pane = ListPane::new(
        MultiColumn::new(data, ColumnSpec::new(vec![5, 0]))
            .unwrap()
            .bordered(true),
    );
    pane.layout_and_draw(&mut screen, Rect::from_size(14, 5)).unwrap();

    // Separator sits after the first column, inside the border.
    assert_eq!(screen.buffer.get(6, 0).unwrap().ch, '┬');
    assert_eq!(screen.buffer.get(6, 2).unwrap().ch, '│');
    assert_eq!(screen.buffer.get(6, 4).unwrap().ch, '┴');
}

#[test]
fn test_multi_column_widths_cached_from_layout() {
    let data = vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]];
    let mut renderer = MultiColumn::new(data, ColumnSpec::new(vec![10, 0, 0])).unwrap();
    renderer.layout(Rect::from_size(50, 10)).unwrap();
    assert_eq!(renderer.widths(), &[10, 19, 19]);

    renderer.layout(Rect::from_size(30, 10)).unwrap();
    assert_eq!(renderer.widths(), &[10, 9, 9]);
}
