//! Command handlers for the f1db CLI.
//!
//! Each handler calls one API method, then prints the result either as
//! colored text through [`super::render`] or as JSON.

use anyhow::{Context, Result};
use f1dbapp::api::F1dbApi;
use f1dbapp::commands::CmdResult;
use f1dbapp::form::FormContext;
use f1dbapp::store::DataStore;
use f1dbapp::views::RecordFilter;
use serde_json::json;
use std::io::{Read, Write};
use std::path::Path;

use super::render::{render_datasets, render_form, render_list, render_messages, render_record};
use super::setup::{Commands, OutputMode};

pub struct Handlers<'a, S: DataStore> {
    api: &'a mut F1dbApi<S>,
    dataset: &'a str,
    output: OutputMode,
}

impl<'a, S: DataStore> Handlers<'a, S> {
    pub fn new(api: &'a mut F1dbApi<S>, dataset: &'a str, output: OutputMode) -> Self {
        Self {
            api,
            dataset,
            output,
        }
    }

    pub fn dispatch(&mut self, command: Option<Commands>) -> Result<()> {
        match command.unwrap_or(Commands::List {
            name: None,
            year: None,
        }) {
            Commands::List { name, year } => self.list(RecordFilter {
                name_contains: name,
                year,
            }),
            Commands::Show { index } => self.show(index),
            Commands::Form { index } => self.form(index),
            Commands::Add { assignments } => {
                let result = self.api.add(self.dataset, &assignments)?;
                self.modification(result)
            }
            Commands::Edit { index, assignments } => {
                let result = self.api.edit(self.dataset, index, &assignments)?;
                self.modification(result)
            }
            Commands::Delete { index } => {
                let result = self.api.delete(self.dataset, index)?;
                self.modification(result)
            }
            Commands::Duplicate { index } => {
                let result = self.api.duplicate(self.dataset, index)?;
                self.modification(result)
            }
            Commands::Import { file, strict } => self.import(file.as_deref(), strict),
            Commands::ReplaceAll { file } => {
                let payload = std::fs::read_to_string(&file)
                    .with_context(|| format!("reading {}", file.display()))?;
                let result = self.api.replace_all(self.dataset, &payload)?;
                self.modification(result)
            }
            Commands::Export { out } => self.export(out.as_deref()),
            Commands::Datasets => self.datasets(),
        }
    }

    fn list(&self, filter: RecordFilter) -> Result<()> {
        let result = self.api.list(self.dataset, &filter)?;
        match self.output {
            OutputMode::Json => print_json(&json!({
                "records": result.listed_records,
                "summary": result.summary,
                "messages": result.messages,
            })),
            OutputMode::Term => {
                print!("{}", render_list(&result.listed_records, result.summary.as_ref()));
                print!("{}", render_messages(&result.messages));
                Ok(())
            }
        }
    }

    fn show(&self, index: usize) -> Result<()> {
        let result = self.api.show(self.dataset, index)?;
        match self.output {
            OutputMode::Json => match result.listed_records.first() {
                Some(listed) => print_json(&json!(listed.record)),
                None => Ok(()),
            },
            OutputMode::Term => {
                for listed in &result.listed_records {
                    print!("{}", render_record(listed));
                }
                Ok(())
            }
        }
    }

    fn form(&self, index: Option<usize>) -> Result<()> {
        let result = self.api.form(self.dataset, index)?;
        match self.output {
            OutputMode::Json => print_json(&json!(result.form_fields)),
            OutputMode::Term => {
                print!("{}", render_form(&result.form_fields));
                Ok(())
            }
        }
    }

    fn import(&mut self, file: Option<&Path>, strict: bool) -> Result<()> {
        let mut ctx = FormContext::new();
        match file {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                ctx.paste(text);
            }
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("reading standard input")?;
                ctx.paste(text);
            }
        }
        let result = self.api.import(self.dataset, &ctx, strict)?;
        self.modification(result)
    }

    fn export(&self, out: Option<&Path>) -> Result<()> {
        let result = self.api.export(self.dataset)?;
        let document = result.document.unwrap_or_default();
        match out {
            Some(path) => {
                std::fs::write(path, &document)
                    .with_context(|| format!("writing {}", path.display()))?;
                if self.output == OutputMode::Term {
                    println!("Exported to {}", path.display());
                }
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&document)?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    fn datasets(&self) -> Result<()> {
        let result = self.api.datasets()?;
        match self.output {
            OutputMode::Json => print_json(&json!(result.datasets)),
            OutputMode::Term => {
                print!("{}", render_datasets(&result.datasets));
                print!("{}", render_messages(&result.messages));
                Ok(())
            }
        }
    }

    fn modification(&self, result: CmdResult) -> Result<()> {
        match self.output {
            OutputMode::Json => print_json(&json!({
                "records": result.affected_records,
                "messages": result.messages,
            })),
            OutputMode::Term => {
                print!("{}", render_messages(&result.messages));
                Ok(())
            }
        }
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
