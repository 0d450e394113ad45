use super::load_sheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::detail::index_of;
use crate::core::pipeline::{Query, apply};
use crate::errors::AppResult;
use crate::models::note::subject_index;
use crate::models::{EntityKind, Note};
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notes {
        subject,
        search,
        url,
    } = cmd
    {
        let notes: Vec<Note> = load_sheet(cfg, EntityKind::Notes, url.as_deref(), None)?;
        let search = search.as_deref().unwrap_or("");

        match subject {
            None => print_subjects(&notes, search),
            Some(subject) => print_notes(&notes, subject.trim(), search),
        }
    }
    Ok(())
}

/// Subject picker: the search narrows subject names.
fn print_subjects(notes: &[Note], search: &str) {
    let needle = search.to_lowercase();
    let subjects: Vec<_> = subject_index(notes)
        .into_iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect();

    if subjects.is_empty() {
        println!("No subjects found.");
        return;
    }

    println!("{CYAN}Subjects{RESET}\n");
    let mut table = Table::new(vec![Column::new("Subject", 32), Column::new("Notes", 6)]);
    for s in &subjects {
        table.add_row(vec![s.name.clone(), s.count.to_string()]);
    }
    print!("{}", table.render());
}

/// Notes of one subject: the search narrows note names.
fn print_notes(notes: &[Note], subject: &str, search: &str) {
    let shown = apply(notes, &Query::new().filter("subject", subject).search(search));

    if shown.is_empty() {
        println!("No notes found for {subject}.");
        return;
    }

    let indexed: Vec<(usize, Note)> = shown
        .into_iter()
        .map(|n| (index_of(notes, |r| *r == n).unwrap_or_default(), n))
        .collect();

    println!("{CYAN}{subject}{RESET} {GREY}({} notes){RESET}\n", indexed.len());
    print!("{}", Table::indexed(&indexed).render());
}
