use std::cmp::Ordering;
use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use palette_cli::pipeline::ValidateResult;
use palette_model::{Palette, PaletteDocument, Severity, ValidationIssue};
use palette_validate::DOCUMENT_LABEL;

pub fn print_summary(result: &ValidateResult) {
    for path in &result.report_paths {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Palette"),
        header_cell("Source"),
        header_cell("Type"),
        header_cell("Colors"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);

    let mut total_colors = 0usize;
    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;
    for row in &result.rows {
        let errors = row.report.error_count();
        let warnings = row.report.warning_count();
        total_colors += row.color_count.unwrap_or(0);
        total_errors += errors;
        total_warnings += warnings;
        table.add_row(vec![
            palette_cell(&row.report.palette),
            Cell::new(row.source.display()),
            Cell::new(row.kind.as_deref().unwrap_or("-")),
            match row.color_count {
                Some(count) => Cell::new(count),
                None => dim_cell("-"),
            },
            count_cell(errors, comfy_table::Color::Red),
            count_cell(warnings, comfy_table::Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_colors).add_attribute(Attribute::Bold),
        count_cell(total_errors, comfy_table::Color::Red).add_attribute(Attribute::Bold),
        count_cell(total_warnings, comfy_table::Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_issue_table(result);

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_issue_table(result: &ValidateResult) {
    let mut issues: Vec<(&str, &ValidationIssue)> = Vec::new();
    for row in &result.rows {
        for issue in &row.report.issues {
            issues.push((&row.report.palette, issue));
        }
    }
    if issues.is_empty() {
        return;
    }
    issues.sort_by(|a, b| {
        let severity = severity_rank(b.1.severity).cmp(&severity_rank(a.1.severity));
        if severity != Ordering::Equal {
            return severity;
        }
        let palette = a.0.cmp(b.0);
        if palette != Ordering::Equal {
            return palette;
        }
        a.1.code.cmp(&b.1.code)
    });

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Palette"),
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Color"),
        header_cell("Category"),
        header_cell("Count"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    for (palette, issue) in issues {
        table.add_row(vec![
            palette_cell(palette),
            severity_cell(issue.severity),
            Cell::new(&issue.code),
            Cell::new(issue.color.as_deref().unwrap_or("-")),
            Cell::new(issue.category.as_deref().unwrap_or("-")),
            match issue.count {
                Some(count) => Cell::new(count),
                None => dim_cell("-"),
            },
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn print_inspect(path: &Path, document: &PaletteDocument) {
    println!("Document: {}", path.display());
    println!("Palettes: {}", document.palettes.len());
    for palette in &document.palettes {
        println!();
        print_palette(palette);
    }
}

fn print_palette(palette: &Palette) {
    let mut heading = palette.label().to_string();
    if let Some(slug) = &palette.slug
        && slug != palette.label()
    {
        heading.push_str(&format!(" ({slug})"));
    }
    if let Some(kind) = &palette.kind {
        heading.push_str(&format!(" [{kind}]"));
    }
    if let Some(version) = &palette.version {
        heading.push_str(&format!(" v{version}"));
    }
    println!("{heading}");
    if let Some(representation) = &palette.color_representation {
        println!("Representation: {representation}");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Position"),
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Hex"),
        header_cell("Group"),
        header_cell("Ref"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);
    for (index, color) in palette.ordered_colors().into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            match color.position {
                Some(position) => Cell::new(position),
                None => dim_cell("-"),
            },
            Cell::new(color.id.as_deref().unwrap_or("-")),
            Cell::new(color.name.as_deref().unwrap_or("-")),
            Cell::new(&color.hex),
            Cell::new(color.group_id.as_deref().unwrap_or("-")),
            if color.reference_in_group {
                Cell::new("✓").fg(comfy_table::Color::Green)
            } else {
                dim_cell("-")
            },
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 2,
        Severity::Warning => 1,
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(comfy_table::Color::Red),
        Severity::Warning => Cell::new("WARN").fg(comfy_table::Color::Yellow),
    }
}

fn count_cell(count: usize, color: comfy_table::Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn palette_cell(name: &str) -> Cell {
    if name == DOCUMENT_LABEL {
        Cell::new(name).fg(comfy_table::Color::DarkGrey)
    } else {
        Cell::new(name)
            .fg(comfy_table::Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}
