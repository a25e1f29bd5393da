//! One handler per subcommand: gather input (prompting where needed), call the API with the
//! current local time, render the result.
//!
//! Every prompt happens before the API call, so declining or aborting never leaves a partial
//! write behind.

use super::{prompt, render, AppContext};
use chrono::Local;
use trackerapp::error::{Result, TrackerError};
use trackerapp::model::RecordUpdate;

pub fn add(
    ctx: &mut AppContext,
    title: Vec<String>,
    tags: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let title = match title.join(" ").trim() {
        "" => prompt::title(None)?,
        given => given.to_string(),
    };
    let tags = tags.as_deref().map(split_tags).unwrap_or_default();

    let now = Local::now();
    let result = ctx.api.add_record(title, tags, date.as_deref(), &now)?;
    render::print_messages(&result.messages);
    Ok(())
}

pub fn list(ctx: &AppContext, from: Option<String>, to: Option<String>) -> Result<()> {
    let now = Local::now();
    let result = ctx.api.list_records(from.as_deref(), to.as_deref(), &now)?;
    render::print_records(&result.listed_records, &now);
    render::print_messages(&result.messages);
    Ok(())
}

pub fn show(ctx: &AppContext, id: u64) -> Result<()> {
    let now = Local::now();
    let result = ctx.api.show_record(id)?;
    for record in &result.listed_records {
        render::print_record_detail(record, &now);
    }
    Ok(())
}

pub fn edit(
    ctx: &mut AppContext,
    id: u64,
    title: Option<String>,
    tags: Option<String>,
) -> Result<()> {
    let update = if title.is_none() && tags.is_none() {
        let current = ctx
            .api
            .show_record(id)?
            .listed_records
            .pop()
            .ok_or(TrackerError::RecordNotFound(id))?;
        let new_title = prompt::title(Some(&current.title))?;
        let new_tags = prompt::tags(&current.tags)?;
        build_update(Some(new_title), new_tags)
    } else {
        let title = match title {
            Some(t) if t.trim().is_empty() => Some(prompt::title(None)?),
            other => other,
        };
        build_update(title, tags)
    };

    let result = ctx.api.edit_record(id, &update)?;
    render::print_messages(&result.messages);
    Ok(())
}

pub fn continue_record(ctx: &mut AppContext, id: u64, date: Option<String>) -> Result<()> {
    let now = Local::now();
    let result = ctx.api.continue_record(id, date.as_deref(), &now)?;
    render::print_messages(&result.messages);
    Ok(())
}

pub fn delete(ctx: &mut AppContext, id: u64, yes: bool) -> Result<()> {
    if !yes {
        // Fail on a missing id before asking about it.
        let record = ctx
            .api
            .show_record(id)?
            .listed_records
            .pop()
            .ok_or(TrackerError::RecordNotFound(id))?;
        if !prompt::confirm(&format!("Delete record {} ({})?", id, record.title))? {
            return Err(TrackerError::Aborted);
        }
    }

    let result = ctx.api.delete_record(id)?;
    render::print_messages(&result.messages);
    Ok(())
}

pub fn path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.store_location().display());
    Ok(())
}

fn build_update(title: Option<String>, tags: Option<String>) -> RecordUpdate {
    RecordUpdate {
        title,
        tags: tags.as_deref().map(split_tags),
    }
}

/// `"a, b,,c "` → `["a", "b", "c"]`.
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
