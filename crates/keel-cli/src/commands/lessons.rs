use comfy_table::{ContentArrangement, Table};

use keel_core::TerminalReason;
use keel_story::condition;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Ending", "Lesson"]);

    for reason in TerminalReason::ALL {
        let card = condition(reason);
        table.add_row(vec![reason.to_string(), card.title.to_string(), card.lesson.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} ways a day can end", TerminalReason::ALL.len());

    Ok(())
}
