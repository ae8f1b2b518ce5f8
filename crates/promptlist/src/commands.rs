//! Handlers for each CLI subcommand.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use promptlist_logging::{ConsoleReporter, PromptReport};
use promptlist_node::{registry, NodeDescriptor, NodeParams};
use promptlist_store::{pick_random, prompt_names, upsert, PromptStore};

use crate::select::choose_list;

/// State shared by every command
pub struct CommandContext {
    pub store: PromptStore,
    pub json_output: bool,
    pub console_log: bool,
}

/// A resolved prompt, as printed by `upsert` and `random`
#[derive(Debug, Serialize)]
struct PromptResult<'a> {
    list: &'a str,
    name: &'a str,
    positive: &'a str,
    negative: &'a str,
}

/// Arguments of the `upsert` command
pub struct UpsertArgs {
    pub list: Option<String>,
    pub new_list_name: Option<String>,
    pub name: String,
    pub positive: String,
    pub negative: String,
    pub overwrite: bool,
    pub console_log: bool,
}

pub fn handle_lists(ctx: &CommandContext) -> Result<()> {
    let files = ctx.store.list_available_files()?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        for file in &files {
            println!("{}", file);
        }
    }
    Ok(())
}

pub fn handle_names(
    ctx: &CommandContext,
    list: Option<&str>,
    new_list_name: Option<&str>,
) -> Result<()> {
    let list_name = choose_list(&ctx.store, list, new_list_name)?;
    let list = ctx
        .store
        .load(&list_name)
        .with_context(|| format!("Failed to load {}", list_name))?;
    let names = prompt_names(&list);

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else if names.is_empty() {
        eprintln!("{} {} has no prompts", "⚠".bright_yellow(), list_name);
    } else {
        for name in &names {
            println!("{}", name);
        }
    }
    Ok(())
}

pub fn handle_upsert(ctx: &CommandContext, args: UpsertArgs) -> Result<()> {
    let list_name = choose_list(
        &ctx.store,
        args.list.as_deref(),
        args.new_list_name.as_deref(),
    )?;
    let mut list = ctx
        .store
        .load(&list_name)
        .with_context(|| format!("Failed to load {}", list_name))?;

    let entry = upsert(
        &mut list,
        &args.name,
        &args.positive,
        &args.negative,
        args.overwrite,
    )?;
    let name = args.name.trim();

    if ctx.console_log || args.console_log {
        ConsoleReporter::new().report(&PromptReport {
            name,
            source: &list_name,
            positive: &entry.positive,
            negative: &entry.negative,
        });
    }

    ctx.store
        .save(&list_name, &list)
        .with_context(|| format!("Failed to save {}", list_name))?;

    print_prompt(
        ctx,
        &PromptResult {
            list: &list_name,
            name,
            positive: &entry.positive,
            negative: &entry.negative,
        },
    )
}

pub fn handle_random(
    ctx: &CommandContext,
    list: Option<&str>,
    new_list_name: Option<&str>,
    console_log: bool,
) -> Result<()> {
    let list_name = choose_list(&ctx.store, list, new_list_name)?;
    let list = ctx
        .store
        .load(&list_name)
        .with_context(|| format!("Failed to load {}", list_name))?;

    let picked =
        pick_random(&list).with_context(|| format!("Cannot pick from {}", list_name))?;

    if ctx.console_log || console_log {
        ConsoleReporter::new().report(&PromptReport {
            name: &picked.name,
            source: &list_name,
            positive: &picked.positive,
            negative: &picked.negative,
        });
    }

    ctx.store
        .save(&list_name, &list)
        .with_context(|| format!("Failed to save {}", list_name))?;

    print_prompt(
        ctx,
        &PromptResult {
            list: &list_name,
            name: &picked.name,
            positive: &picked.positive,
            negative: &picked.negative,
        },
    )
}

pub fn handle_nodes(ctx: &CommandContext) -> Result<()> {
    let mut descriptors: Vec<NodeDescriptor> = Vec::new();
    for registration in registry().iter() {
        let node = registration.create(ctx.store.clone());
        descriptors.push(node.descriptor()?);
    }

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    for descriptor in &descriptors {
        println!(
            "{} {}",
            descriptor.class_name.bold(),
            format!("({})", descriptor.display_name).dimmed()
        );
        for input in &descriptor.inputs {
            let kind = serde_json::to_value(&input.kind)?;
            let kind = kind.get("type").and_then(|t| t.as_str()).unwrap_or("?");
            println!("  {} {} {}", "in ".dimmed(), input.name, kind.dimmed());
        }
        for output in &descriptor.outputs {
            println!("  {} {}", "out".dimmed(), output);
        }
    }
    Ok(())
}

pub fn handle_invoke(ctx: &CommandContext, class_name: &str, params: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(params).context("Failed to parse --params as JSON")?;
    let params = NodeParams::from_json(value)?;

    let node = registry().create(class_name, ctx.store.clone())?;
    let output = node
        .process(&params)
        .with_context(|| format!("Node {} failed", class_name))?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_prompt(ctx: &CommandContext, result: &PromptResult<'_>) -> Result<()> {
    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!(
        "{} {}",
        result.name.bold(),
        format!("({})", result.list).dimmed()
    );
    println!("{} {}", "positive:".bright_green(), result.positive);
    println!("{} {}", "negative:".bright_red(), result.negative);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptlist_store::{PromptEntry, NEW_LIST_SENTINEL};
    use tempfile::TempDir;

    fn test_context() -> (TempDir, CommandContext) {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::open(dir.path()).unwrap();
        let ctx = CommandContext {
            store,
            json_output: true,
            console_log: false,
        };
        (dir, ctx)
    }

    fn upsert_args(list: &str, name: &str, positive: &str) -> UpsertArgs {
        UpsertArgs {
            list: Some(list.to_string()),
            new_list_name: None,
            name: name.to_string(),
            positive: positive.to_string(),
            negative: String::new(),
            overwrite: false,
            console_log: false,
        }
    }

    #[test]
    fn test_upsert_then_random() {
        let (_dir, ctx) = test_context();

        handle_upsert(&ctx, upsert_args("list.json", "A", "pos")).unwrap();
        handle_random(&ctx, Some("list.json"), None, false).unwrap();

        let list = ctx.store.load("list.json").unwrap();
        assert_eq!(list["A"], PromptEntry::new("pos", ""));
    }

    #[test]
    fn test_upsert_into_new_list() {
        let (_dir, ctx) = test_context();
        let mut args = upsert_args(NEW_LIST_SENTINEL, "A", "pos");
        args.new_list_name = Some("fresh".to_string());

        handle_upsert(&ctx, args).unwrap();

        assert_eq!(ctx.store.load("fresh.json").unwrap().len(), 1);
    }

    #[test]
    fn test_random_on_empty_list_fails() {
        let (_dir, ctx) = test_context();

        assert!(handle_random(&ctx, Some("list.json"), None, false).is_err());
    }

    #[test]
    fn test_invoke_rejects_bad_params() {
        let (_dir, ctx) = test_context();

        assert!(handle_invoke(&ctx, "ComfyUI_Prompt_JSON", "not json").is_err());
        assert!(handle_invoke(&ctx, "ComfyUI_Prompt_JSON", "[1, 2]").is_err());
        assert!(handle_invoke(&ctx, "Unknown", "{}").is_err());
    }

    #[test]
    fn test_invoke_prompt_json() {
        let (_dir, ctx) = test_context();

        handle_invoke(
            &ctx,
            "ComfyUI_Prompt_JSON",
            r#"{"Prompt Name": "A", "Positive Prompt": "pos", "Negative Prompt": "neg"}"#,
        )
        .unwrap();

        let list = ctx.store.load("list.json").unwrap();
        assert_eq!(list["A"], PromptEntry::new("pos", "neg"));
    }

    #[test]
    fn test_lists_and_nodes() {
        let (_dir, ctx) = test_context();

        handle_lists(&ctx).unwrap();
        handle_nodes(&ctx).unwrap();
    }
}
