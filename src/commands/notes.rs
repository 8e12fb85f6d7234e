use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use smartplan_core::note::NoteColor;
use smartplan_core::workspace::Workspace;

use crate::render::Render;

#[derive(Subcommand)]
pub enum NoteAction {
    /// List notes, newest first (default)
    List {
        /// Only notes whose title or text contains this
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add a note
    Add {
        title: String,
        content: String,

        /// purple, blue, green, yellow or pink
        #[arg(short, long, default_value = "purple")]
        color: NoteColor,
    },
    /// Delete a note
    Rm { id: String },
}

pub fn run(workspace_path: &Path, action: Option<NoteAction>) -> Result<()> {
    let mut workspace = Workspace::load(workspace_path)?;

    match action.unwrap_or(NoteAction::List { search: None }) {
        NoteAction::List { search } => {
            let notes = workspace.notes.search(search.as_deref().unwrap_or(""));
            if notes.is_empty() {
                println!("{}", "No notes found".dimmed());
                return Ok(());
            }
            for note in notes {
                println!("{} {}", note.render(), format!("#{}", note.id).dimmed());
            }
        }
        NoteAction::Add {
            title,
            content,
            color,
        } => {
            let note = workspace.notes.add(&title, &content, color)?;
            println!("{} {}", "Added".green(), note.title.bold());
            workspace.save(workspace_path)?;
        }
        NoteAction::Rm { id } => {
            let note = workspace.notes.delete(&id)?;
            println!("{} {}", "Deleted".red(), note.title);
            workspace.save(workspace_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspace.json");

        run(
            &path,
            Some(NoteAction::Add {
                title: "Ревью".into(),
                content: "Собрать замечания".into(),
                color: NoteColor::Blue,
            }),
        )
        .unwrap();

        let id = Workspace::load(&path).unwrap().notes.all()[0].id.clone();
        run(&path, Some(NoteAction::Rm { id: id.clone() })).unwrap();

        let workspace = Workspace::load(&path).unwrap();
        assert!(workspace.notes.all().iter().all(|n| n.id != id));
        assert_eq!(workspace.notes.all().len(), 2);
    }

    #[test]
    fn blank_note_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspace.json");

        let result = run(
            &path,
            Some(NoteAction::Add {
                title: "Пусто".into(),
                content: " ".into(),
                color: NoteColor::Purple,
            }),
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
