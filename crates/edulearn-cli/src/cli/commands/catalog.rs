//! Catalog command handlers.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use edulearn_core::catalog::Catalog;
use edulearn_core::config::Config;

pub fn courses(config: &Config) -> Result<()> {
    let catalog = load(config)?;

    let mut table = new_table(&["ID", "Title", "Category", "Instructor", "Lessons", "Progress", "Rating"]);
    for course in &catalog.courses {
        table.add_row(vec![
            Cell::new(&course.id),
            Cell::new(&course.title).add_attribute(Attribute::Bold),
            Cell::new(&course.category),
            Cell::new(&course.instructor),
            Cell::new(course.lessons).set_alignment(CellAlignment::Right),
            percent_cell(course.progress),
            Cell::new(format!("{:.1}", course.rating)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");

    let stats = catalog.dashboard_stats();
    println!(
        "{} courses, {} lessons completed, {}% average progress",
        stats.courses, stats.completed_lessons, stats.average_progress
    );
    Ok(())
}

pub fn lessons(config: &Config, course_id: &str) -> Result<()> {
    let catalog = load(config)?;
    let Some(course) = catalog.find_course(course_id) else {
        anyhow::bail!("Unknown course '{course_id}'. Run `edulearn catalog courses` to list ids.");
    };

    println!("{} Lessons", course.title);
    let mut table = new_table(&["Done", "Title", "Duration", "Description", "Resources"]);
    for lesson in catalog.lessons_for(&course.id) {
        table.add_row(vec![
            Cell::new(if lesson.completed { "✓" } else { "" }).set_alignment(CellAlignment::Center),
            Cell::new(&lesson.title),
            Cell::new(&lesson.duration),
            Cell::new(&lesson.description),
            Cell::new(lesson.resources.join(", ")),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn students(config: &Config) -> Result<()> {
    let catalog = load(config)?;

    let mut table = new_table(&["Name", "Email", "Progress", "Courses", "Joined"]);
    for student in &catalog.students {
        table.add_row(vec![
            Cell::new(&student.name).add_attribute(Attribute::Bold),
            Cell::new(&student.email),
            percent_cell(student.progress),
            Cell::new(student.courses.len()).set_alignment(CellAlignment::Right),
            Cell::new(student.joined_label()),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load(config: &Config) -> Result<Catalog> {
    Catalog::load(config).context("load catalog")
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
    table
}

fn percent_cell(percent: u8) -> Cell {
    Cell::new(format!("{percent}%")).set_alignment(CellAlignment::Right)
}
