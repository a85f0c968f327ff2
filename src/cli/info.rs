use crate::cipher::{
    apply_walk, disruption_gaps, invert_walk, ColumnGrid, Columnar, DisruptedCount, DisruptedLine,
    KeyOrder, Mode, Myszkowski, Transposition,
};
use crate::config::CipherSpec;
use crate::error::Result;

/// Describe how a cipher lays out and reorders a text
pub fn show_info(spec: &CipherSpec, text: &str) -> Result<String> {
    let symbols: Vec<char> = text.chars().collect();
    let walk = spec.walk(symbols.len())?;

    let mut output = String::new();
    output.push_str("Transposition Layout\n");
    output.push_str("====================\n\n");
    output.push_str(&format!("Cipher: {}\n", spec.kind()));
    output.push_str(&format!("Symbols: {}\n", symbols.len()));
    output.push('\n');

    if let Some(key) = spec.key() {
        let key: Vec<char> = key.chars().collect();
        output.push_str(&describe_key("Key", &key));
    }

    match spec {
        CipherSpec::DisruptedCount { disruption_key, .. } => {
            let disruption: Vec<char> = disruption_key.chars().collect();
            output.push_str(&describe_key("Disruption key", &disruption));
            let ranks = KeyOrder::new(&disruption);
            let gaps = disruption_gaps(symbols.len(), ranks.ranks());
            output.push_str(&format!("  Gaps: {}\n", join(&gaps)));
            output.push('\n');
        }
        CipherSpec::DisruptedLine { fill, .. } => {
            output.push_str(&format!("Fill: {}\n\n", if *fill { "square" } else { "diagonal" }));
        }
        CipherSpec::Spiral { width, route } | CipherSpec::Serpent { width, route } => {
            output.push_str(&format!("Route: {} from {:?}, width {}\n", route, route.corner(), width));
            output.push_str(&format!("Steps ({} columns):\n", width));
            output.push_str(&render_steps(&walk, *width));
            output.push('\n');
        }
        _ => {}
    }

    if let Some(grid) = grid_for(spec, symbols.len())? {
        output.push_str(&format!(
            "Grid ({} columns x {} rows):\n",
            grid.columns(),
            grid.rows()
        ));
        output.push_str(&render_grid(&grid, &symbols));
        output.push('\n');
    }

    output.push_str(&format!("Walk: {}\n", join(&walk)));
    let encrypted: String = apply_walk(&symbols, &walk, Mode::Encrypt).into_iter().collect();
    output.push_str(&format!("Encrypted: {}\n", encrypted));

    Ok(output)
}

fn grid_for(spec: &CipherSpec, len: usize) -> Result<Option<ColumnGrid>> {
    match spec {
        CipherSpec::Columnar { key } => Columnar::new(key.chars()).grid(len).map(Some),
        CipherSpec::Myszkowski { key } => Myszkowski::new(key.chars()).grid(len).map(Some),
        CipherSpec::DisruptedCount {
            key,
            disruption_key,
        } => DisruptedCount::new(key.chars(), disruption_key.chars()).grid(len),
        CipherSpec::DisruptedLine { key, fill } => DisruptedLine::new(key.chars(), *fill).grid(len),
        _ => Ok(None),
    }
}

fn describe_key(label: &str, key: &[char]) -> String {
    let order = KeyOrder::new(key);
    let mut output = format!("{}: {}\n", label, key.iter().collect::<String>());
    output.push_str(&format!("  Order: {}\n", join(order.indices())));
    output.push_str(&format!("  Ranks: {}\n", join(order.ranks())));
    if order.run_count() < order.len() {
        let runs: Vec<String> = order.runs().map(|run| format!("[{}]", join(run))).collect();
        output.push_str(&format!("  Runs: {}\n", runs.join(" ")));
    }
    output
}

fn render_grid(grid: &ColumnGrid, symbols: &[char]) -> String {
    let mut output = String::new();
    for row in grid.iter_rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(position) => symbols[*position].to_string(),
                None => "·".to_string(),
            })
            .collect();
        output.push_str(&format!("  {}\n", cells.join(" ")));
    }
    output
}

/// Step number of each cell, laid out row by row
fn render_steps(walk: &[usize], width: usize) -> String {
    let steps = invert_walk(walk);
    let pad = walk.len().saturating_sub(1).to_string().len();
    let mut output = String::new();
    for row in steps.chunks(width.max(1)) {
        let cells: Vec<String> = row.iter().map(|step| format!("{:>pad$}", step)).collect();
        output.push_str(&format!("  {}\n", cells.join(" ")));
    }
    output
}

fn join(values: &[usize]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}
