use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use listpane::{ColumnSpec, Event, Key, ListPane, MultiColumn, Terminal};

/// Multi-column listing: an auto-width name column plus fixed size and
/// date columns, separated by vertical rules inside a border.
fn main() -> listpane::Result<()> {
    let log_file = File::create("columns.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let rows: Vec<Vec<String>> = (1..=60)
        .map(|n| {
            vec![
                format!("report-{n:03}.txt"),
                format!("{} kB", n * 37 % 900),
                format!("2026-{:02}-{:02}", n % 12 + 1, n % 28 + 1),
            ]
        })
        .collect();

    let mut term = Terminal::new()?;
    let renderer = MultiColumn::new(rows, ColumnSpec::new(vec![0, 8, 12]))?.bordered(true);
    let mut pane = ListPane::new(renderer);
    let area = term.surface().rect();
    pane.layout_and_draw(&mut term, area)?;

    loop {
        let Some(event) = term.read_event(None)? else {
            continue;
        };

        match event {
            Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } => break,
            Event::Resize { .. } => {
                term.resize_if_changed()?;
                let area = term.surface().rect();
                pane.layout_and_draw(&mut term, area)?;
            }
            event => {
                pane.handle_input(&mut term, &event)?;
            }
        }
    }

    drop(term);
    println!(
        "current row {}, selected {:?}",
        pane.current_index(),
        pane.selected_indices()
    );
    Ok(())
}
