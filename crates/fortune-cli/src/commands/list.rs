use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use fortune_core::{Category, Mood};

pub fn categories(templates: Option<&Path>) -> Result<(), String> {
    let bank = super::load_bank(templates)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Templates"]);
    for category in Category::ALL {
        let count = bank.templates_for(category).map_or(0, <[String]>::len);
        table.add_row(vec![category.to_string(), count.to_string()]);
    }

    println!("{table}");
    Ok(())
}

pub fn moods(templates: Option<&Path>) -> Result<(), String> {
    let bank = super::load_bank(templates)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Mood", "Modifiers"]);
    for mood in Mood::KNOWN {
        let count = bank.modifiers_for(&mood).map_or(0, <[String]>::len);
        table.add_row(vec![mood.to_string(), count.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  Any other mood is accepted and leaves the fortune unmodified.");
    Ok(())
}
