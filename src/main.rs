use std::time::Instant;

use comfy_table::Table;

use cellgroups_rs::{count_groups, parse_pattern, random_pattern, render_pattern};

struct Args {
    width: usize,
    height: usize,
    density: u32,
}

/// Positional args: `<width> [height] [density%]`. Height defaults to width,
/// density to 60%.
fn parse_args() -> Result<Args, String> {
    fn parse<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, String> {
        raw.parse()
            .map_err(|_| format!("Invalid {name}: {raw:?}"))
    }

    let mut args = std::env::args().skip(1);
    let width = match args.next() {
        Some(raw) => parse(&raw, "width")?,
        None => 10,
    };
    let height = match args.next() {
        Some(raw) => parse(&raw, "height")?,
        None => width,
    };
    let density = match args.next() {
        Some(raw) => parse(&raw, "density")?,
        None => 60,
    };
    if density > 100 {
        return Err(format!("Density should be 0-100, got {density}"));
    }

    Ok(Args {
        width,
        height,
        density,
    })
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = parse_args()?;

    let pattern = random_pattern(&mut rand::thread_rng(), args.width, args.height, args.density);

    let start = Instant::now();
    let cells =
        parse_pattern(&pattern, args.width, args.height).map_err(|error| error.to_string())?;
    let parse_time = start.elapsed();

    println!("\n{}", render_pattern(&cells, args.width, args.height));

    let cell_count = cells.len();
    let start = Instant::now();
    let groups = count_groups(cells);
    let count_time = start.elapsed();

    let mut table = Table::new();
    table.set_header(vec!["Filled cells", "Groups", "Parsed in", "Counted in"]);
    table.add_row(vec![
        cell_count.to_string(),
        groups.to_string(),
        format!("{parse_time:.2?}"),
        format!("{count_time:.2?}"),
    ]);
    println!("{table}");

    Ok(())
}
