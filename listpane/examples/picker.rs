use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use listpane::{Event, Key, ListPane, SingleColumn, Terminal};

/// Single-column picker: arrows/j/k to move, space to mark, enter to
/// accept, q or escape to quit without accepting.
fn main() -> listpane::Result<()> {
    let log_file = File::create("picker.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let rows: Vec<String> = (1..=100).map(|n| format!("item number {n}")).collect();

    let mut term = Terminal::new()?;
    let mut pane = ListPane::new(SingleColumn::new(rows).bordered(true));
    let area = term.surface().rect();
    pane.layout_and_draw(&mut term, area)?;

    let accepted = loop {
        let Some(event) = term.read_event(None)? else {
            continue;
        };

        match event {
            Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } => break false,
            Event::Resize { .. } => {
                term.resize_if_changed()?;
                let area = term.surface().rect();
                pane.layout_and_draw(&mut term, area)?;
            }
            event => {
                let handled = pane.handle_input(&mut term, &event)?;
                // Enter falls through on purpose: the pane has made sure
                // at least one row is marked, accepting is our job.
                if !handled {
                    if let Event::Key {
                        key: Key::Enter, ..
                    } = event
                    {
                        break true;
                    }
                }
            }
        }
    };

    drop(term);
    if accepted {
        println!("selected rows: {:?}", pane.selected_indices());
    } else {
        println!("cancelled");
    }
    Ok(())
}
