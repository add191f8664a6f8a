use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::Local;

use super::app::App;
use super::util::split_entry_args;
use crate::models::Theme;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Money Control", cmd_quit, r);
    register_command!("quit", "Quit Money Control", cmd_quit, r);
    register_command!(
        "add",
        "Add an entry (e.g. :add Rent 900)",
        cmd_add,
        r
    );
    register_command!("a", "Add an entry (e.g. :a Food 12,50)", cmd_add, r);
    register_command!(
        "remove",
        "Remove entry by position (e.g. :remove 2)",
        cmd_remove,
        r
    );
    register_command!("rm", "Remove entry by position", cmd_remove, r);
    register_command!("reset", "Clear all entries (asks first)", cmd_reset, r);
    register_command!(
        "theme",
        "Switch theme (e.g. :theme brasil, no name cycles)",
        cmd_theme,
        r
    );
    register_command!("t", "Switch theme", cmd_theme, r);
    register_command!(
        "export",
        "Export the dashboard to a document (e.g. :export ~/reports)",
        cmd_export,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_error(
            format!("Unknown command: :{cmd_name}. Did you mean :{suggestion}?"),
            Local::now(),
        );
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 2) // skip short aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Expand a leading `~` to the home directory.
pub(crate) fn expand_home(path: &str) -> std::path::PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(dirs) = directories::UserDirs::new() {
            return dirs.home_dir().join(rest.trim_start_matches('/'));
        }
    }
    std::path::PathBuf::from(path)
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some((category, amount)) = split_entry_args(args) else {
        app.set_error("Usage: :add <category> <amount>", Local::now());
        return Ok(());
    };
    app.category_input = category.to_string();
    app.amount_input = amount.to_string();
    app.submit_entry(Local::now());
    Ok(())
}

fn cmd_remove(args: &str, app: &mut App) -> anyhow::Result<()> {
    match args.parse::<usize>() {
        Ok(position) if position > 0 => app.remove_at(position - 1, Local::now()),
        _ => app.set_error("Usage: :remove <position> (1 is the first entry)", Local::now()),
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.request_reset();
    Ok(())
}

fn cmd_theme(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.cycle_theme(true, Local::now());
        return Ok(());
    }
    match Theme::parse(args) {
        Some(theme) => app.set_theme(theme, Local::now()),
        None => {
            let names: Vec<&str> = Theme::all().iter().map(|t| t.label()).collect();
            app.set_error(
                format!("Unknown theme '{args}'. Try one of: {}", names.join(", ")),
                Local::now(),
            );
        }
    }
    Ok(())
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    if !args.is_empty() {
        app.export_dir = expand_home(args);
    }
    app.export(Local::now())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
