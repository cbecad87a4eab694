use std::env;
use std::fs;
use std::io::Read;

use anyhow::{bail, Result};
use log::info;

use recipe_text::ingredient_parser::parse_ingredient_list;
use recipe_text::serializer::{serialize_ingredients, serialize_steps};
use recipe_text::step_parser::parse_step_list;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("ingredients");
    let text = read_input(args.get(2))?;

    info!("Parsing {} bytes of input as {}", text.len(), mode);

    match mode {
        "ingredients" => {
            let records = parse_ingredient_list(&text);
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        "steps" => {
            let records = parse_step_list(&text);
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        // Parse and regenerate the canonical editable text
        "roundtrip-ingredients" => {
            println!("{}", serialize_ingredients(&parse_ingredient_list(&text)));
        }
        "roundtrip-steps" => {
            println!("{}", serialize_steps(&parse_step_list(&text)));
        }
        other => {
            bail!(
                "Unknown mode {:?}; expected ingredients, steps, \
                 roundtrip-ingredients, or roundtrip-steps",
                other
            );
        }
    }

    Ok(())
}

/// Read input from a file path, or stdin when no path is given.
fn read_input(path: Option<&String>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
