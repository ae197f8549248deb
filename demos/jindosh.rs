use gridlock::{
    puzzles::jindosh,
    solver::{engine::SolverEngine, stats::render_stats_table},
};
use prettytable::{Cell, Row, Table};

pub fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let (registry, constraints) = jindosh::puzzle().compile().unwrap();
    let solver = SolverEngine::new();
    let (solutions, stats) = solver.solve(&registry, &constraints).unwrap();

    match solutions.len() {
        0 => {
            println!("No solution found.");
            std::process::exit(1);
        }
        1 => println!("Solution found!"),
        n => println!("{} solutions found, the riddle is under-constrained:", n),
    }

    let seat = registry.category_id("seat").unwrap();
    for solution in &solutions {
        let mut table = Table::new();
        table.add_row(Row::new(
            registry
                .categories()
                .iter()
                .map(|category| Cell::new(&category.name))
                .collect(),
        ));
        // One row per seat, leftmost first.
        for position in 0..registry.cardinality() {
            let mut cells = Vec::new();
            for category in 0..registry.category_count() {
                let occupant = solution.projection(seat, category)[position];
                cells.push(Cell::new(match occupant {
                    Some(partner) => registry.value_name(partner),
                    None => "?",
                }));
            }
            table.add_row(Row::new(cells));
        }
        println!("{}", table);
    }

    println!("Stats:\n{}", render_stats_table(&stats, &constraints));
}
