use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::emergency::{dialable, search_hostels, search_safety};
use crate::utils::colors::{CYAN, RED, RESET};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Emergency { search } = cmd {
        let term = search.as_deref().unwrap_or("");
        let hostels = search_hostels(term);
        let safety = search_safety(term);

        if hostels.is_empty() && safety.is_empty() {
            println!("No contacts match '{term}'.");
            return Ok(());
        }

        if !hostels.is_empty() {
            println!("{CYAN}Hostels{RESET}\n");
            let mut table = Table::new(vec![
                Column::new("Hostel", 10),
                Column::new("Blocks", 14),
                Column::new("Landline", 14),
                Column::new("Emergency", 12),
            ]);
            for h in hostels {
                for (i, b) in h.blocks.iter().enumerate() {
                    // name and emergency number only on the first block row
                    let (name, emergency) = if i == 0 {
                        (h.name.to_string(), dialable(h.emergency))
                    } else {
                        (String::new(), String::new())
                    };
                    table.add_row(vec![
                        name,
                        b.blocks.to_string(),
                        dialable(b.landline),
                        emergency,
                    ]);
                }
            }
            println!("{}", table.render());
        }

        if !safety.is_empty() {
            println!("{RED}Safety & medical{RESET}\n");
            let mut table = Table::new(vec![
                Column::new("Contact", 32),
                Column::new("Mobile", 12),
                Column::new("Landline", 24),
            ]);
            for s in safety {
                table.add_row(vec![
                    s.title.to_string(),
                    s.mobile.to_string(),
                    s.landline.to_string(),
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
