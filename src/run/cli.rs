use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::ledger::{Confirm, LedgerError};
use crate::models::Theme;
use crate::ui::app::App;
use crate::ui::commands::expand_home;
use crate::ui::snapshot;

pub(crate) fn as_cli(args: &[String], app: &mut App) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], app),
        "remove" | "rm" => cli_remove(&args[2..], app),
        "reset" => cli_reset(&args[2..], app),
        "list" | "ls" => cli_list(app),
        "theme" => cli_theme(&args[2..], app),
        "export" => cli_export(&args[2..], app),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("money-control {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Money Control - local-only expense tracker");
    println!();
    println!("Usage: money-control [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add <category> <amount>       Add an entry (amount as 12.50 or 12,50)");
    println!("  remove <position>             Remove an entry (1 is the first)");
    println!("  reset [--yes]                 Clear all entries");
    println!("  list                          List entries with their share of the total");
    println!("  theme [name]                  Show or set the theme (valentine, halloween, brasil)");
    println!("  export [dir]                  Write money_control.txt (default: configured dir)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

/// Asks on stdin. Anything but `y`/`yes` declines.
struct StdinPrompt;

impl Confirm for StdinPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn cli_add(args: &[String], app: &mut App) -> Result<()> {
    let Some((amount, category)) = args.split_last() else {
        anyhow::bail!("Usage: money-control add <category> <amount>");
    };
    let category = category.join(" ");
    app.tracker
        .add(&category, amount)
        .map_err(LedgerError::from)?;
    let money = app.tracker.money();
    let ledger = app.tracker.ledger();
    println!(
        "Added {category}: {} (total {})",
        ledger
            .amounts()
            .last()
            .map(|a| money.format(*a))
            .unwrap_or_default(),
        money.format(ledger.total())
    );
    Ok(())
}

fn cli_remove(args: &[String], app: &mut App) -> Result<()> {
    let position = match args.first().map(|a| a.parse::<usize>()) {
        Some(Ok(n)) if n > 0 => n,
        _ => anyhow::bail!("Usage: money-control remove <position> (1 is the first entry)"),
    };
    let entry = app
        .tracker
        .remove(position - 1)
        .map_err(LedgerError::from)?;
    println!(
        "Removed {}: {}",
        entry.category,
        app.tracker.money().format(entry.amount)
    );
    Ok(())
}

fn cli_reset(args: &[String], app: &mut App) -> Result<()> {
    let cleared = if args.iter().any(|a| a == "--yes" || a == "-y") {
        app.tracker.reset(&mut true)
    } else {
        app.tracker.reset(&mut StdinPrompt)
    };
    if cleared {
        println!("All data cleared");
    } else {
        println!("Reset cancelled");
    }
    Ok(())
}

fn cli_list(app: &App) -> Result<()> {
    let ledger = app.tracker.ledger();
    if ledger.is_empty() {
        println!("No entries");
        return Ok(());
    }

    let chart = app.tracker.chart();
    println!("{}", chart.title);
    println!("{}", "─".repeat(48));
    for i in 0..ledger.len() {
        if let Some(line) = chart.tooltip(i) {
            println!("{:>3}. {line}", i + 1);
        }
    }
    println!("{}", "─".repeat(48));
    println!("Total: {}", app.tracker.money().format(ledger.total()));
    Ok(())
}

fn cli_theme(args: &[String], app: &mut App) -> Result<()> {
    let Some(name) = args.first() else {
        println!("{} ({})", app.tracker.theme(), app.tracker.theme().class_name());
        return Ok(());
    };
    let theme = Theme::parse(name).ok_or_else(|| {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.class_name()).collect();
        anyhow::anyhow!("Unknown theme '{name}'. Try one of: {}", names.join(", "))
    })?;
    app.tracker.set_theme(theme);
    println!("Theme set to {theme}");
    Ok(())
}

fn cli_export(args: &[String], app: &mut App) -> Result<()> {
    if let Some(dir) = args.first().filter(|a| !a.starts_with('-')) {
        app.export_dir = expand_home(dir);
    }
    let (path, pages) = snapshot::export_document(app)?;
    println!("Exported {pages} page(s) to {}", path.display());
    Ok(())
}
