use super::NotesArgs;
use crate::services::{run_weekly, Creation, Rotation};
use crate::Result;
use colored::Colorize;

/// Rotate last week's note and make sure this week's exists.
pub fn run(args: &NotesArgs) -> Result<()> {
    let config = args.resolve()?;
    let report = run_weekly(&config, args.today())?;

    if let Rotation::Rotated { file_name, to, .. } = &report.rotation {
        println!(
            "{}",
            format!(
                "📦 Found last week's note {}, rotated into {}",
                file_name, config.rotate_dir
            )
            .cyan()
        );
        println!("   Location: {}", to.display());
    }

    if let Creation::Created { file_name, path } = &report.creation {
        println!(
            "{}",
            format!("📝 No note for this week yet, created {}", file_name).green()
        );
        println!("   Location: {}", path.display());
    }

    Ok(())
}
