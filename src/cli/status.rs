use super::NotesArgs;
use crate::services::{inspect, NoteStatus};
use crate::Result;
use colored::Colorize;

pub fn run(args: &NotesArgs, json: bool) -> Result<()> {
    let config = args.resolve()?;
    let status = inspect(&config, args.today())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Week of {} (today {})",
            status.current.week_start, status.today
        )
        .cyan()
        .bold()
    );
    println!("   Notes:    {}", status.notes_dir.display());
    println!("   Rotation: {}", status.rotate_dir.display());
    println!();

    let current = if status.current.active {
        "✅ present".green()
    } else {
        "📝 will be created".yellow()
    };
    println!("   This week: {} {}", status.current.file_name, current);
    println!(
        "   Last week: {} {}",
        status.previous.file_name,
        describe_previous(&status.previous)
    );

    if !status.stale.is_empty() {
        println!();
        println!(
            "{}",
            "⚠️  Older notes left in the notes directory (never rotated automatically):".yellow()
        );
        for name in &status.stale {
            println!("   • {}", name);
        }
    }

    Ok(())
}

fn describe_previous(note: &NoteStatus) -> colored::ColoredString {
    match (note.active, note.archived) {
        (true, true) => "📦 will be rotated, replacing the archived copy".yellow(),
        (true, false) => "📦 will be rotated".yellow(),
        (false, true) => "✅ archived".green(),
        (false, false) => "— none".bright_black(),
    }
}
