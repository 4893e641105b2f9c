use comfy_table::{ContentArrangement, Table};
use serde_json::json;

use keel_story::{CastMember, Location, scenarios_for};

pub fn run(place: Option<&str>, as_json: bool) -> Result<(), String> {
    let cast: Vec<CastMember> = match place {
        Some(name) => {
            let location =
                Location::parse(name).ok_or_else(|| format!("unknown place: {name}"))?;
            let present = location.cast();
            if present.is_empty() {
                return Err(format!("no one to talk to at the {location}"));
            }
            present.to_vec()
        }
        None => vec![
            CastMember::Trainer,
            CastMember::Coworker,
            CastMember::Partner,
            CastMember::ChildOne,
            CastMember::ChildTwo,
        ],
    };

    if as_json {
        return print_json(&cast);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Person", "Scenario", "Choice", "Reads as"]);

    let mut rows = 0;
    for member in &cast {
        for scenario in scenarios_for(*member) {
            for choice in &scenario.choices {
                let tone = if choice.effect.is_positive() {
                    "steady"
                } else {
                    "slide"
                };
                table.add_row(vec![
                    member.to_string(),
                    scenario.title.clone(),
                    choice.text.clone(),
                    tone.to_string(),
                ]);
                rows += 1;
            }
        }
    }

    println!("{table}");
    println!();
    println!("  {rows} choices");

    Ok(())
}

fn print_json(cast: &[CastMember]) -> Result<(), String> {
    let value = json!(
        cast.iter()
            .map(|member| {
                json!({
                    "person": member.to_string(),
                    "place": member.location().to_string(),
                    "scenarios": scenarios_for(*member)
                        .iter()
                        .map(|scenario| {
                            json!({
                                "title": scenario.title,
                                "choices": scenario
                                    .choices
                                    .iter()
                                    .map(|choice| {
                                        json!({
                                            "text": choice.text,
                                            "effect": choice.effect,
                                        })
                                    })
                                    .collect::<Vec<_>>(),
                            })
                        })
                        .collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>()
    );
    let rendered = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}
