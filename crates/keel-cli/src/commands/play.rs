use std::io::{self, BufRead, Write};

use colored::Colorize;

use keel_story::{StoryConfig, StorySession};

pub fn run(seed: u64) -> Result<(), String> {
    let mut session = StorySession::new(StoryConfig::default().with_seed(seed));

    println!("{}", "Even Keel".bold());
    println!("One day. Keep yourself, and the people counting on you, steady.");
    println!("Type 'help' for commands. (seed {seed})\n");
    match session.process("look") {
        Ok(scene) => println!("{scene}\n"),
        Err(e) => return Err(e.to_string()),
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let leaving = input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q");
        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
        if leaving {
            break;
        }
    }

    Ok(())
}
