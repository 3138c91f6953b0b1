//! Interactive worksheet session: one in-memory log, a line-oriented shell.
//!
//! Every command runs one synchronous pass over the session state; nothing is
//! persisted, quitting discards the log.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{EntryDraft, Session};
use crate::errors::AppResult;
use crate::export::{default_export_filename, export_to_file};
use crate::models::category::SUGGESTED_SUB_CATEGORIES;
use crate::ui::messages::{badge, error, header, info, level_up, success, warning};
use crate::ui::stats;
use crate::utils::table::Table;
use crate::utils::time::{format_minutes, today};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const TABLE_HEADERS: [&str; 7] = [
    "Date",
    "Start",
    "End",
    "Duration (mins)",
    "Parent Category",
    "Sub-Category",
    "Description",
];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session {
        goal,
        gamification,
        no_gamification,
    } = cmd
    {
        let enabled = if *gamification {
            true
        } else if *no_gamification {
            false
        } else {
            cfg.gamification
        };
        let daily_goal = goal.unwrap_or(cfg.daily_goal);

        let mut session = Session::new(enabled, daily_goal);
        let stdin = io::stdin();
        run_shell(&mut session, &mut stdin.lock())?;
    }
    Ok(())
}

fn run_shell<R: BufRead>(session: &mut Session, input: &mut R) -> AppResult<()> {
    header("Time Audit Worksheet");
    if session.gamification().is_some() {
        info("Track your time, earn points, unlock badges, and level up!");
    } else {
        info("Track your time on admin task categories.");
    }
    info("Type 'help' for the command list.");
    println!();

    loop {
        let Some(line) = prompt(input, "taudit> ")? else {
            break; // EOF
        };

        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        match cmd {
            "" => continue,
            "add" => cmd_add(session, input)?,
            "list" => cmd_list(session),
            "stats" => cmd_stats(session),
            "export" => cmd_export(session, rest.first().copied()),
            "goal" => cmd_goal(session, rest.first().copied()),
            "reset" => cmd_reset(session),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => warning(format!("Unknown command '{}'. Type 'help'.", other)),
        }
    }

    Ok(())
}

/// The entry form: one prompt per field, in the worksheet's order.
/// A rejected submission leaves the session untouched.
fn cmd_add<R: BufRead>(session: &mut Session, input: &mut R) -> AppResult<()> {
    let Some(date) = prompt(input, "Date (YYYY-MM-DD, empty = today): ")? else {
        return Ok(());
    };
    let Some(start) = prompt(input, "Start time (HH:MM): ")? else {
        return Ok(());
    };
    let Some(end) = prompt(input, "End time (HH:MM): ")? else {
        return Ok(());
    };
    let Some(parent) = prompt(input, "Parent category (EHS, HR, QA, ESG, Other): ")? else {
        return Ok(());
    };

    for (i, sub) in SUGGESTED_SUB_CATEGORIES.iter().enumerate() {
        println!("  {}. {}", i + 1, sub);
    }
    let Some(sub_choice) = prompt(input, "Sub-category (number or text): ")? else {
        return Ok(());
    };
    let mut sub_category = resolve_sub_category(&sub_choice);
    if sub_category.eq_ignore_ascii_case("Other") {
        let Some(custom) = prompt(input, "Custom sub-category: ")? else {
            return Ok(());
        };
        sub_category = custom;
    }

    let Some(description) = prompt(input, "Task description: ")? else {
        return Ok(());
    };

    let draft = EntryDraft {
        date,
        start,
        end,
        parent,
        sub_category,
        description,
    };

    match session.submit(&draft, today()) {
        Ok(outcome) => {
            let entry = &session.entries()[outcome.entry_index];
            match &outcome.score {
                Some(score) => success(format!(
                    "Entry added ({} min)! +{} points earned.",
                    entry.duration_min, score.points_earned
                )),
                None => success(format!("Entry added ({} min).", entry.duration_min)),
            }
            if let Some(score) = &outcome.score {
                for b in &score.new_badges {
                    badge(format!("Badge unlocked: {}", b.label()));
                }
                if score.leveled_up
                    && let Some(game) = session.gamification()
                {
                    level_up(format!("Level up! You are now level {}.", game.level));
                }
            }
        }
        Err(e) => error(e),
    }

    Ok(())
}

/// Maps a 1-based number onto the suggested list; anything else is free text.
fn resolve_sub_category(choice: &str) -> String {
    if let Ok(n) = choice.trim().parse::<usize>()
        && n >= 1
        && n <= SUGGESTED_SUB_CATEGORIES.len()
    {
        return SUGGESTED_SUB_CATEGORIES[n - 1].to_string();
    }
    choice.trim().to_string()
}

fn cmd_list(session: &Session) {
    if session.size() == 0 {
        info("No entries yet.");
        return;
    }

    let mut table = Table::new(&TABLE_HEADERS);
    let mut total = 0i64;
    for entry in session.entries() {
        total += entry.duration_min;
        table.add_row(entry.to_row());
    }

    print!("{}", table.render());
    println!(
        "{} entries, total logged {}",
        session.size(),
        format_minutes(total)
    );
}

fn cmd_stats(session: &Session) {
    match session.gamification() {
        Some(game) => {
            header("Your Stats");
            print!("{}", stats::render(game));
        }
        None => warning("Gamification is disabled for this session."),
    }
}

fn cmd_export(session: &Session, file: Option<&str>) {
    let path = match file {
        Some(f) => PathBuf::from(f),
        None => PathBuf::from(default_export_filename(today())),
    };

    match export_to_file(&path, session.entries()) {
        Ok(format) => success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        )),
        Err(e) => error(e),
    }
}

fn cmd_goal(session: &mut Session, value: Option<&str>) {
    if session.gamification().is_none() {
        warning("Gamification is disabled for this session.");
        return;
    }
    match value.and_then(|v| v.parse::<u32>().ok()) {
        Some(goal) if goal > 0 => {
            session.set_daily_goal(goal);
            success(format!("Daily goal set to {} minutes.", goal));
        }
        _ => warning("Usage: goal <minutes>"),
    }
}

fn cmd_reset(session: &mut Session) {
    session.reset();
    success("Worksheet cleared. All entries and stats reset.");
}

fn print_help() {
    println!("Commands:");
    println!("  add            log a new time entry (interactive form)");
    println!("  list           show the entry log as a table");
    println!("  stats          show points, level, streak and badges");
    println!("  export [FILE]  write the log to FILE (.csv or .json)");
    println!("  goal <min>     change the daily challenge goal");
    println!("  reset          clear all entries and stats");
    println!("  quit           end the session (the log is discarded)");
}

/// Prints the prompt and reads one line. `None` on EOF.
fn prompt<R: BufRead>(input: &mut R, text: &str) -> AppResult<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
