// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Terminal table rendering for the list, calendar and statistics views.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::ActivityStats;
use crate::services::project::{CalendarEvent, CustomerRow, TrainingRow};
use crate::time_utils;

/// Customers list view.
pub fn customers_table(rows: &[CustomerRow]) -> Table {
    let mut table = base_table(vec![
        "ID",
        "First name",
        "Last name",
        "Email",
        "Phone",
        "Address",
        "Postcode",
        "City",
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.id),
            Cell::new(&row.firstname),
            Cell::new(&row.lastname),
            Cell::new(&row.email),
            Cell::new(&row.phone),
            Cell::new(&row.streetaddress),
            Cell::new(&row.postcode),
            Cell::new(&row.city),
        ]);
    }
    table
}

/// Trainings list view. Dates are formatted here, degrading to the raw
/// value when they do not parse.
pub fn trainings_table(rows: &[TrainingRow]) -> Table {
    let mut table = base_table(vec!["ID", "Activity", "Date", "Duration", "Customer"]);
    align_column(&mut table, 3, CellAlignment::Right);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.id),
            Cell::new(&row.activity),
            Cell::new(time_utils::display_or_raw(&row.date_raw)),
            Cell::new(
                row.duration_minutes
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(&row.customer_name),
        ]);
    }
    table
}

/// Calendar view: events in chronological order.
pub fn calendar_table(events: &[CalendarEvent]) -> Table {
    let mut ordered: Vec<&CalendarEvent> = events.iter().collect();
    ordered.sort_by_key(|e| e.start);

    let mut table = base_table(vec!["Start", "End", "Training"]);
    for event in ordered {
        table.add_row(vec![
            Cell::new(time_utils::format_display(event.start)),
            Cell::new(time_utils::format_display(event.end)),
            Cell::new(&event.title),
        ]);
    }
    table
}

/// Statistics view: one row per activity plus a grand-total row.
pub fn stats_table(stats: &ActivityStats) -> Table {
    let mut table = base_table(vec!["Activity", "Minutes", "Sessions", "Avg/Session"]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for aggregate in &stats.activities {
        table.add_row(vec![
            Cell::new(&aggregate.activity),
            Cell::new(aggregate.total_minutes),
            Cell::new(aggregate.session_count),
            Cell::new(format!("{:.1}", aggregate.average_minutes())),
        ]);
    }

    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.total_minutes).add_attribute(Attribute::Bold),
        Cell::new(stats.total_sessions()).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table
}

fn base_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .into_iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
