use super::{load_sheet, remember_latest_notification};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::detail::index_of;
use crate::core::pipeline::{FacetFilter, Listing, Query, SortOrder, apply, facet_options};
use crate::errors::AppResult;
use crate::models::{
    AiTool, Club, Course, Deal, DutyLeave, EntityKind, Event, Note, Notification, PgRoom, Record,
    YouTubeChannel,
};
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::table::{Table, TableRow};
use serde::Serialize;
use serde::de::DeserializeOwned;

struct ListArgs<'a> {
    kind: EntityKind,
    query: Query,
    url: Option<&'a str>,
    retries: Option<u32>,
    json: bool,
    facets: bool,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        entity,
        search,
        category,
        filter,
        sort,
        url,
        retries,
        json,
        facets,
        raw,
    } = cmd
    {
        if *raw {
            let rows: Vec<Record> = load_sheet(cfg, *entity, url.as_deref(), *retries)?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        let args = ListArgs {
            kind: *entity,
            query: build_query(search, category, filter, *sort)?,
            url: url.as_deref(),
            retries: *retries,
            json: *json,
            facets: *facets,
        };

        match entity {
            EntityKind::Notifications => {
                let feed = listing::<Notification>(&args, cfg)?;
                remember_latest_notification(cfg, &feed);
            }
            EntityKind::Clubs => {
                listing::<Club>(&args, cfg)?;
            }
            EntityKind::Events => {
                listing::<Event>(&args, cfg)?;
            }
            EntityKind::PgRooms => {
                listing::<PgRoom>(&args, cfg)?;
            }
            EntityKind::DutyLeaves => {
                listing::<DutyLeave>(&args, cfg)?;
            }
            EntityKind::Notes => {
                listing::<Note>(&args, cfg)?;
            }
            EntityKind::Courses => {
                listing::<Course>(&args, cfg)?;
            }
            EntityKind::Deals => {
                listing::<Deal>(&args, cfg)?;
            }
            EntityKind::AiTools => {
                listing::<AiTool>(&args, cfg)?;
            }
            EntityKind::Youtube => {
                listing::<YouTubeChannel>(&args, cfg)?;
            }
        }
    }
    Ok(())
}

fn build_query(
    search: &Option<String>,
    category: &Option<String>,
    filters: &[String],
    sort: Option<SortOrder>,
) -> AppResult<Query> {
    let mut query = Query::new().search(search.clone().unwrap_or_default());
    if let Some(c) = category {
        query = query.filter("category", c.as_str());
    }
    for expr in filters {
        query.filters.push(FacetFilter::parse(expr)?);
    }
    query.order = sort;
    Ok(query)
}

/// Fetch, filter and print one listing. Returns the raw rows.
fn listing<T>(args: &ListArgs<'_>, cfg: &Config) -> AppResult<Vec<T>>
where
    T: Listing + TableRow + PartialEq + Serialize + DeserializeOwned,
{
    args.query.validate::<T>()?;

    let raw: Vec<T> = load_sheet(cfg, args.kind, args.url, args.retries)?;

    if args.facets {
        print_facets(&raw);
        return Ok(raw);
    }

    let query = args.query.clone().or_default_order::<T>();
    let shown = apply(&raw, &query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(raw);
    }

    if shown.is_empty() {
        println!("{}", args.kind.empty_message());
        return Ok(raw);
    }

    // listing positions refer to the raw load, which is what `show` indexes
    let indexed: Vec<(usize, T)> = shown
        .into_iter()
        .map(|item| {
            let pos = index_of(&raw, |r| *r == item).unwrap_or_default();
            (pos, item)
        })
        .collect();

    println!(
        "{}{}{} {}({} of {}){}\n",
        CYAN,
        args.kind.title(),
        RESET,
        GREY,
        indexed.len(),
        raw.len(),
        RESET
    );
    print!("{}", Table::indexed(&indexed).render());

    Ok(raw)
}

fn print_facets<T: Listing>(raw: &[T]) {
    if T::facets().is_empty() {
        println!("No filters available.");
        return;
    }
    for facet in T::facets() {
        println!("{}{}{}: {}", CYAN, facet, RESET, facet_options(raw, facet).join(", "));
    }
}
