use std::{
    env, fs,
    io::{self, Read},
    path::PathBuf,
    process,
};

use colored::Colorize;
use quote_core::{
    backup, init,
    budget::Budget,
    query,
    store::{JsonStore, RecordStore},
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    let store = JsonStore::new_default()?;

    match command.as_str() {
        "new" => {
            let budget = Budget::new();
            println!("{}", serde_json::to_string_pretty(&budget)?);
        }
        "list" => {
            let term = args.next().unwrap_or_default();
            let mut records = query::filter(&store.list_all()?, &term);
            query::sort_newest_first(&mut records);
            for budget in &records {
                let id = budget.id.unwrap_or(0);
                println!(
                    "{:>5}  {:<24} {:<10} {}",
                    format!("#{id}").bold(),
                    budget.client_data.name,
                    budget.client_data.plate,
                    format!("R$ {:.2}", budget.total_value).green()
                );
            }
            let summary = query::summarize(&records);
            println!(
                "{} {}",
                format!("{} quote(s)", summary.count).cyan(),
                format!("R$ {:.2}", summary.total_value).green().bold()
            );
        }
        "show" => {
            let id: u64 = parse_id(args.next())?;
            match store.get_by_id(id)? {
                Some(budget) => println!("{}", serde_json::to_string_pretty(&budget)?),
                None => {
                    eprintln!("No quote with id {id}");
                    process::exit(1);
                }
            }
        }
        "save" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            let budget: Budget = serde_json::from_str(&buffer)?;
            let saved = store.upsert(budget)?;
            println!(
                "Saved quote #{} (total R$ {:.2})",
                saved.id.unwrap_or(0),
                saved.total_value
            );
        }
        "delete" => {
            let id: u64 = parse_id(args.next())?;
            store.delete(id)?;
            println!("Deleted quote #{id} (if it existed)");
        }
        "export" => {
            let path = args.next().map(PathBuf::from).unwrap_or_else(|| {
                PathBuf::from(backup::backup_file_name(
                    chrono::Local::now().date_naive(),
                ))
            });
            let blob = backup::export_records(&store.list_all()?)?;
            fs::write(&path, blob)?;
            println!("Exported backup to {}", path.display());
        }
        "import" => {
            let path = args.next().map(PathBuf::from).unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            let blob = fs::read_to_string(&path)?;
            let count = backup::import_records(&store, &blob)?;
            println!("Restored {count} quote(s) from {}", path.display());
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn parse_id(arg: Option<String>) -> Result<u64, Box<dyn std::error::Error>> {
    let raw = arg.unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    Ok(raw.parse()?)
}

fn print_usage() {
    eprintln!(
        "Usage: quote_core_cli <command>\n\
         Commands:\n  \
         new\n  \
         list [term]\n  \
         show <id>\n  \
         save < quote.json\n  \
         delete <id>\n  \
         export [file.json]\n  \
         import <file.json>"
    );
}
