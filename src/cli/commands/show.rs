use super::load_sheet;
use crate::cli::parser::{Commands, DetailKind};
use crate::config::Config;
use crate::core::detail::{Identified, by_index, by_stable_id, parse_index};
use crate::errors::{AppError, AppResult};
use crate::models::{EntityKind, Event, PgRoom};
use crate::utils::colors::{CYAN, GREY, RESET, color_for_availability, colorize};
use crate::utils::date::day_badge;
use crate::utils::formatting::{bold, field_line, wrap_block};

const WRAP: usize = 78;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        entity,
        index,
        id,
        url,
    } = cmd
    {
        match entity {
            DetailKind::Events => {
                let events: Vec<Event> = load_sheet(cfg, EntityKind::Events, url.as_deref(), None)?;
                let event = resolve(&events, index.as_deref(), id.as_deref(), "event")?;
                print_event(event);
            }
            DetailKind::PgRooms => {
                let rooms: Vec<PgRoom> =
                    load_sheet(cfg, EntityKind::PgRooms, url.as_deref(), None)?;
                let room = resolve(&rooms, index.as_deref(), id.as_deref(), "PG room")?;
                print_pg_room(room);
            }
        }
    }
    Ok(())
}

/// Pick a record by content id, or else by position in this load.
/// An index that is not a non-negative integer resolves to nothing.
pub(crate) fn resolve<'a, T: Identified>(
    items: &'a [T],
    index: Option<&str>,
    id: Option<&str>,
    label: &str,
) -> AppResult<&'a T> {
    if let Some(id) = id {
        return by_stable_id(items, id).ok_or_else(|| AppError::NotFound(format!("{label} id {id}")));
    }

    let raw = index.ok_or_else(|| AppError::InvalidIndex("missing index or --id".to_string()))?;
    parse_index(raw)
        .and_then(|i| by_index(items, i))
        .ok_or_else(|| AppError::NotFound(format!("{label} #{raw}")))
}

fn print_lines(lines: impl IntoIterator<Item = Option<String>>) {
    for line in lines.into_iter().flatten() {
        println!("  {line}");
    }
}

fn print_event(event: &Event) {
    println!("\n{}", bold(&event.title));
    println!("{}{} · id {}{}\n", GREY, day_badge(&event.date), event.stable_id(), RESET);

    print_lines([
        field_line("Date", &event.date),
        field_line("Time", &event.time),
        field_line("Venue", &event.venue),
        Some(format!("{} {}", bold("Entry:"), event.price_label())),
        field_line("Organizer", &event.organizer),
        field_line("Register", &event.link),
        field_line("Poster", &event.image_url),
    ]);

    if !event.description.trim().is_empty() {
        println!("\n{CYAN}About{RESET}");
        println!("{}", wrap_block(&event.description, WRAP, "  "));
    }
    println!();
}

fn print_pg_room(room: &PgRoom) {
    let free = room.free_beds();

    println!("\n{}", bold(&room.name));
    println!("{}{} · id {}{}\n", GREY, room.pg_type, room.stable_id(), RESET);

    print_lines([
        field_line("Rent", &room.rent),
        field_line("Rating", &room.rating),
        Some(format!(
            "{} {} ({} / {})",
            bold("Free beds:"),
            colorize(&free.to_string(), color_for_availability(free)),
            room.current_occupancy.trim(),
            room.total_capacity.trim()
        )),
        field_line("Contact", room.contact()),
        field_line("Address", &room.address),
        field_line("Location", &room.location_url),
        field_line("Amenities", &room.amenities),
    ]);

    if !room.description.trim().is_empty() {
        println!("\n{CYAN}About{RESET}");
        println!("{}", wrap_block(&room.description, WRAP, "  "));
    }

    let images = room.images();
    let videos = room.videos();
    if !images.is_empty() || !videos.is_empty() {
        println!("\n{CYAN}Media{RESET}");
        for url in images.iter().chain(videos.iter()) {
            println!("  {url}");
        }
    }

    if room.looking_for_roommate() {
        println!("\n{CYAN}Looking for a roommate{RESET}");
        print_lines([
            field_line("Message", &room.roommate_message),
            field_line("Preferences", &room.roommate_preferences),
            field_line("Move-in", &room.move_in_date),
            field_line("Contact", &room.roommate_contact_number),
        ]);
    }
    println!();
}
