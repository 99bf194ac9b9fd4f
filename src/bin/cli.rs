#![cfg(feature = "cli")]

use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

use ansi_term::Colour;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use prefix_rib::match_options::{MatchOptions, MatchType};
use prefix_rib::parse_prefix;
use prefix_rib::rib::Rib;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file with `net,len,value` rows to load on start-up
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// File to keep the shell history in
    #[arg(long, default_value = "/tmp/prefix-rib-history.txt")]
    history: PathBuf,
}

fn load_prefixes(
    rib: &mut Rib<String>,
    path: &Path,
) -> Result<usize, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut count = 0;
    for result in rdr.records() {
        let record = result?;
        let (Some(net), Some(len), Some(value)) =
            (record.get(0), record.get(1), record.get(2))
        else {
            return Err(format!("short record: {:?}", record).into());
        };
        rib.add(&format!("{}/{}", net, len), value.to_string())?;
        count += 1;
    }
    Ok(count)
}

fn error(msg: impl std::fmt::Display) {
    println!("{}", Colour::Red.paint(msg.to_string()));
}

fn print_stats(rib: &Rib<String>) {
    let stats = rib.counters();
    println!("total prefixes :\t{}", rib.len());
    println!("ipv4 prefixes :\t{}", rib.prefixes_v4_count());
    println!("ipv6 prefixes :\t{}", rib.prefixes_v6_count());
    println!("total nodes :\t{}", stats.nodes_count());
    println!("ipv4 nodes :\t{}", stats.nodes_v4);
    println!("ipv6 nodes :\t{}", stats.nodes_v6);
}

// Run a single shell command. Returns false if the shell should exit.
fn run_command(rib: &mut Rib<String>, line: &str) -> bool {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return true;
    };
    let arg = words.next();

    match (cmd, arg) {
        ("add", Some(pfx)) => {
            let value = words.collect::<Vec<_>>().join(" ");
            if value.is_empty() {
                error("Error: add needs a value");
                return true;
            }
            match rib.add(pfx, value) {
                Ok(Some(old)) => println!(
                    "{}",
                    Colour::Yellow.paint(format!("replaced {}", old))
                ),
                Ok(None) => println!("ok"),
                Err(err) => error(err),
            }
        }
        ("del", Some(pfx)) => match rib.delete(pfx) {
            Ok(Some(old)) => println!("deleted {} {}", pfx, old),
            Ok(None) => println!(
                "{}",
                Colour::Yellow.paint(format!("Warning: {} is not stored", pfx))
            ),
            Err(err) => error(err),
        },
        ("get", Some(pfx)) => match rib.get(pfx) {
            Ok(Some(value)) => println!("{}", value),
            Ok(None) => println!("no match"),
            Err(err) => error(err),
        },
        ("exact", Some(pfx)) => match rib.get_exact(pfx) {
            Ok(Some(value)) => println!("{}", value),
            Ok(None) => println!("no match"),
            Err(err) => error(err),
        },
        ("match", Some(pfx)) => {
            let search = match parse_prefix(pfx) {
                Ok(pk) => pk.prefix(),
                Err(err) => {
                    error(err);
                    return true;
                }
            };
            match rib.match_prefix(
                &search,
                &MatchOptions {
                    match_type: MatchType::EmptyMatch,
                    include_less_specifics: true,
                    include_more_specifics: true,
                },
            ) {
                Ok(res) => println!("{}", res),
                Err(err) => error(err),
            }
        }
        ("list", None) => {
            for rec in rib.prefixes_iter() {
                println!("{}", rec);
            }
        }
        ("stats", None) => print_stats(rib),
        ("clear", None) => rib.clear(),
        ("quit", None) | ("exit", None) => return false,
        _ => error(format!("Error: unknown command {:?}", line)),
    }
    true
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rib = Rib::<String>::new();
    if let Some(path) = cli.load.as_ref() {
        let start = std::time::Instant::now();
        let count = load_prefixes(&mut rib, path)?;
        println!(
            "finished loading {} prefixes in {} msecs...",
            count,
            start.elapsed().as_millis()
        );
        print_stats(&rib);
    }

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(&cli.history).is_err() {
        println!("No previous history.");
    }

    loop {
        match rl.readline("(prefix-rib)> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                if !run_command(&mut rib, &line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                error(format!("Error: {}", err));
                break;
            }
        }
    }
    rl.save_history(&cli.history)?;
    Ok(())
}
