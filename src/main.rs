//! CLI entry point for routine-planner
//!
//! Provides a command-line interface for listing the course catalogue,
//! checking a set of section picks for conflicts, and printing the laid
//! out weekly grid.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use routine_planner::catalogue::{load_catalogue, Catalogue};
use routine_planner::core::types::{format_minutes, Section, Weekday};
use routine_planner::layout::layout_week;
use routine_planner::routine::{Notification, RoutineManager, Severity};

#[derive(Parser)]
#[command(name = "routine-planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List courses from the catalogue
    List {
        /// Path to the catalogue CSV
        #[arg(short, long, default_value = "CSE_Courses.csv")]
        catalogue: PathBuf,

        /// Optional search term (matches course code or name)
        query: Option<String>,
    },

    /// Try a set of section picks and report every outcome
    Check {
        /// Path to the catalogue CSV
        #[arg(short, long, default_value = "CSE_Courses.csv")]
        catalogue: PathBuf,

        /// Section ids to add, in order (e.g. CSE101-1)
        #[arg(short, long = "take", required = true)]
        take: Vec<String>,
    },

    /// Build a routine and print the weekly grid layout
    Show {
        /// Path to the catalogue CSV
        #[arg(short, long, default_value = "CSE_Courses.csv")]
        catalogue: PathBuf,

        /// Section ids to add, in order (e.g. CSE101-1)
        #[arg(short, long = "take", required = true)]
        take: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { catalogue, query } => list_courses(&catalogue, query.as_deref())?,
        Commands::Check { catalogue, take } => check_picks(&catalogue, &take)?,
        Commands::Show { catalogue, take } => show_grid(&catalogue, &take)?,
    }

    Ok(())
}

/// Loads the catalogue from a (possibly tilde-prefixed) path
fn open_catalogue(path: &PathBuf) -> anyhow::Result<Catalogue> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = std::path::Path::new(expanded.as_ref());

    println!("{} Loading catalogue: {}", "→".cyan(), path.display());
    let catalogue = load_catalogue(path)
        .map_err(|e| anyhow::anyhow!("Failed to load catalogue: {}", e))?;
    println!("{} {} courses loaded\n", "✓".green(), catalogue.len());

    Ok(catalogue)
}

/// List catalogue courses, optionally filtered
fn list_courses(catalogue_path: &PathBuf, query: Option<&str>) -> anyhow::Result<()> {
    let catalogue = open_catalogue(catalogue_path)?;
    let groups = catalogue.search(query.unwrap_or(""));

    if groups.is_empty() {
        println!("{}", "No matching courses.".yellow());
        return Ok(());
    }

    for group in &groups {
        println!(
            "{} {} ({} section{})",
            group.course_code.cyan().bold(),
            group.course_name,
            group.sections.len(),
            if group.sections.len() == 1 { "" } else { "s" }
        );

        for section in &group.sections {
            let times = if section.is_unscheduled() {
                "Schedule TBA".dimmed().to_string()
            } else {
                section
                    .intervals
                    .iter()
                    .map(|w| format!("{}", w))
                    .collect::<Vec<_>>()
                    .join(" | ")
            };

            println!(
                "  {} {} · {} · {}",
                format!("Sec {}", section.section_label).magenta(),
                section.faculty,
                section.room,
                times,
            );
        }
        println!();
    }

    println!("{} Total: {} courses", "✓".green(), groups.len());
    Ok(())
}

/// Resolves section ids and feeds them to a manager, printing outcomes
///
/// Returns the manager and the number of rejected or unresolvable picks.
fn build_routine(catalogue: &Catalogue, picks: &[String]) -> (RoutineManager, usize) {
    let mut manager = RoutineManager::new();
    manager.subscribe(Box::new(print_notification));

    let mut failures = 0;
    for pick in picks {
        let Some(section) = resolve_pick(catalogue, pick) else {
            println!("{} Unknown section id: {}", "✗".red(), pick.cyan());
            failures += 1;
            continue;
        };

        if !manager.add_section(&section).is_admitted() {
            failures += 1;
        }
    }

    (manager, failures)
}

/// Prints a membership-change notification with severity coloring
fn print_notification(note: &Notification) {
    let tag = match note.severity {
        Severity::Success => "✓".green(),
        Severity::Warning => "⚠".yellow(),
        Severity::Error => "✗".red().bold(),
    };
    println!("{} {}", tag, note.message);
}

/// Finds the catalogue section for a `CODE-SECTION` id
fn resolve_pick(catalogue: &Catalogue, pick: &str) -> Option<Section> {
    let (code, label) = pick.rsplit_once('-')?;
    catalogue.find_section(code.trim(), label.trim()).cloned()
}

/// Check section picks for conflicts
fn check_picks(catalogue_path: &PathBuf, picks: &[String]) -> anyhow::Result<()> {
    let catalogue = open_catalogue(catalogue_path)?;
    let (manager, failures) = build_routine(&catalogue, picks);

    println!();
    if failures == 0 {
        println!(
            "{} {}",
            "✓".green().bold(),
            format!("All {} sections placed without conflicts!", manager.len()).bold()
        );
    } else {
        println!(
            "{} {} of {} picks could not be placed",
            "✗".red().bold(),
            failures,
            picks.len(),
        );
        std::process::exit(1);
    }

    Ok(())
}

/// Build the routine and print the weekly grid layout
fn show_grid(catalogue_path: &PathBuf, picks: &[String]) -> anyhow::Result<()> {
    let catalogue = open_catalogue(catalogue_path)?;
    let (manager, _) = build_routine(&catalogue, picks);

    if manager.is_empty() {
        println!("\n{}", "Your routine is empty.".yellow());
        return Ok(());
    }

    let week = layout_week(manager.entries());

    for day in Weekday::SCHEDULABLE {
        let mut items: Vec<_> = week.get(&day).map(|v| v.as_slice()).unwrap_or(&[]).to_vec();
        if items.is_empty() {
            continue;
        }
        items.sort_by_key(|item| (item.interval.start_min, item.lane));

        println!("\n{}", format!("{}", day).bold().underline());
        for item in &items {
            let backups = if item.backups.is_empty() {
                String::new()
            } else {
                format!(
                    " (+{} backup{})",
                    item.backups.len(),
                    if item.backups.len() == 1 { "" } else { "s" }
                )
            };

            println!(
                "  [lane {}/{}] {} – {}  {} · {} · {}{}",
                item.lane + 1,
                item.total_lanes,
                format_minutes(item.interval.start_min),
                format_minutes(item.interval.end_min),
                item.anchor.id.cyan().bold(),
                item.anchor.room,
                item.anchor.faculty,
                backups.dimmed(),
            );
        }
    }

    println!(
        "\n{} {} entries on the grid",
        "✓".green(),
        manager.len()
    );
    Ok(())
}
