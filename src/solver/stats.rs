use prettytable::{Cell, Row, Table};

use crate::solver::{
    constraint::Constraint,
    engine::{ConstraintId, PerConstraintStats, SearchStats},
};

pub fn render_stats_table(stats: &SearchStats, constraints: &[Constraint]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Branches"),
        Cell::new("Pruned"),
        Cell::new("Forced Bindings"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();

    sorted_stats.sort_by_key(|a| *a.0);

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = &constraints[*constraint_id].descriptor;

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.branches.to_string()),
            Cell::new(&constraint_stats.pruned.to_string()),
            Cell::new(&constraint_stats.forced_bindings.to_string()),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
