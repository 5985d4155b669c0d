/*
[INPUT]:  Task board and user input via terminal prompts
[OUTPUT]: Task lists printed to the terminal, assignments submitted
[POS]:    CLI interactive flow - terminal rendition of the Tasks page
[UPDATE]: When the board gains handlers the menu should expose
*/

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use taskdesk::{ActiveTab, AssignError, Assignee, TaskBoard};
use taskdesk_adapter::{TaskAssignee, TaskRecord};

use super::show_tab;

pub async fn run_interactive(board: TaskBoard) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Tasks Management").bold().cyan());

    let identity = board.identity().await;
    if !identity.can_act() {
        println!(
            "{}",
            style("No signed-in user configured; assigning is disabled.").yellow()
        );
    }

    if let Err(err) = show_tab(&board, ActiveTab::MyTasks).await {
        println!("{}", style(err).red());
    }
    print_tasks(&board).await;

    loop {
        let actions = vec!["My Tasks", "Assigned", "Assign task", "Exit"];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 | 1 => {
                let tab = ActiveTab::ALL[selection];
                if let Err(err) = show_tab(&board, tab).await {
                    println!("{}", style(err).red());
                }
                print_tasks(&board).await;
            }
            2 => assign_task(&board, &theme).await?,
            _ => return Ok(()),
        }
    }
}

async fn print_tasks(board: &TaskBoard) {
    let view = board.view().await;
    println!("\n{}", style(format!("--- {} ---", view.active_tab)).bold());
    if view.tasks.is_empty() {
        println!("{}", style("No tasks found.").yellow());
        return;
    }
    for task in &view.tasks {
        println!("{}", task_line(task));
    }
    println!();
}

fn task_line(task: &TaskRecord) -> String {
    let id = task.key().unwrap_or_else(|| "-".to_string());
    let assignee = task
        .assign_to
        .as_ref()
        .and_then(TaskAssignee::name)
        .unwrap_or("-");
    format!(
        "{} | {} | {} | {} | {}",
        id,
        task.task_name.as_deref().unwrap_or("-"),
        task.document_type.as_deref().unwrap_or("-"),
        assignee,
        task.description.as_deref().unwrap_or(""),
    )
}

async fn assign_task(board: &TaskBoard, theme: &ColorfulTheme) -> Result<()> {
    board.open_assignment().await;
    fill_draft(board, theme).await?;

    loop {
        match board.submit_assignment().await {
            Ok(()) => {
                println!("{}", style("Task assigned.").green());
                print_tasks(board).await;
                return Ok(());
            }
            Err(AssignError::Invalid(err)) => {
                println!("{}", style(err).yellow());
                let again = Confirm::with_theme(theme)
                    .with_prompt("Fill in the missing fields?")
                    .default(true)
                    .interact()?;
                if !again {
                    break;
                }
                fill_draft(board, theme).await?;
            }
            Err(err) if offers_retry(&err) => {
                println!("{}", style(err).red());
                let retry = Confirm::with_theme(theme)
                    .with_prompt("Retry with the same details?")
                    .default(true)
                    .interact()?;
                if !retry {
                    break;
                }
            }
            Err(err) => {
                println!("{}", style(err).red());
                break;
            }
        }
    }

    board.cancel_assignment().await;
    Ok(())
}

/// Only transient backend failures are worth resubmitting unchanged
fn offers_retry(err: &AssignError) -> bool {
    matches!(err, AssignError::Backend(inner) if inner.is_retryable())
}

/// Blank input clears the assignee; anything else must be a number
fn parse_assignee_id(input: &str) -> Result<Option<i64>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| format!("Assignee user ID '{input}' is not a number"))
}

/// Prompt for every draft field, keeping current values as defaults
async fn fill_draft(board: &TaskBoard, theme: &ColorfulTheme) -> Result<()> {
    let draft = board.dialog().await.draft;

    let task: String = Input::with_theme(theme)
        .with_prompt("Task")
        .with_initial_text(draft.selected_task)
        .allow_empty(true)
        .interact_text()?;
    board.set_task(task).await;

    let document_type: String = Input::with_theme(theme)
        .with_prompt("Document type")
        .with_initial_text(draft.selected_document_type)
        .allow_empty(true)
        .interact_text()?;
    board.set_document_type(document_type).await;

    let current = draft.selected_assignee;
    let assignee_id: String = Input::with_theme(theme)
        .with_prompt("Assignee user ID")
        .with_initial_text(current.as_ref().map(|a| a.user_id.to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    let assignee = match parse_assignee_id(&assignee_id) {
        Ok(Some(user_id)) => {
            let username: String = Input::with_theme(theme)
                .with_prompt("Assignee username")
                .with_initial_text(current.map(|a| a.username).unwrap_or_default())
                .allow_empty(true)
                .interact_text()?;
            Some(Assignee::new(user_id, username))
        }
        Ok(None) => None,
        Err(note) => {
            println!("{}", style(note).yellow());
            None
        }
    };
    board.set_assignee(assignee).await;

    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .with_initial_text(draft.description)
        .allow_empty(true)
        .interact_text()?;
    board.set_description(description).await;

    Ok(())
}
