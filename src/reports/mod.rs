use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use monocrack::alphabet::ALPHABET;
use monocrack::cracker::CrackOutcome;
use monocrack::mapping::Mapping;

/// Two-row table: cipher letters on top, the plain letter each maps to below.
pub fn print_mapping_grid(name: &str, mapping: &Mapping) {
    println!("\nMapping: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let header: Vec<Cell> = ALPHABET
        .iter()
        .map(|&b| {
            Cell::new((b as char).to_string())
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold)
        })
        .collect();
    table.add_row(header);

    let plain: Vec<Cell> = mapping
        .as_bytes()
        .iter()
        .map(|&b| Cell::new((b as char).to_string()).set_alignment(CellAlignment::Center))
        .collect();
    table.add_row(plain);

    println!("{}", table);
}

pub fn print_crack_summary(outcome: &CrackOutcome) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Stage").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Key"),
    ]);

    table.add_row(vec![
        Cell::new("Frequency"),
        Cell::new(outcome.baseline_score),
        Cell::new(outcome.baseline_mapping.to_string()),
    ]);

    let (label, color) = if outcome.reverted {
        ("Search (discarded)", Color::Red)
    } else {
        ("Search", Color::Green)
    };
    table.add_row(vec![
        Cell::new(label).fg(color),
        Cell::new(outcome.optimized_score).fg(color),
        Cell::new(outcome.optimized_mapping.to_string()),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("\n{}", table);
    println!(
        "Accepted swaps: {} over {} iterations (chain {})",
        outcome.accepted, outcome.iterations, outcome.chain
    );
    println!("Final score: {}", outcome.score());
}
