//! `genshard expand`

use anyhow::{Context, Result};

use genshard::domain::entities::InputFile;
use genshard::domain::services::{check_collisions, expand_all};

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ExpansionEvent, StartEvent};
use crate::ui::views::expand::{render_collision_free, render_expansion};

pub fn cmd_expand(template: &str, package: Option<&str>, paths: &[String], json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("expand"))?;
    }

    let inputs: Vec<InputFile> = paths
        .iter()
        .map(|path| match package {
            Some(dir) => InputFile::new(dir, path.as_str()),
            None => InputFile::without_package(path.as_str()),
        })
        .collect();

    let outputs = match expand_all(template, &inputs) {
        Ok(outputs) => outputs,
        Err(err) => {
            super::report_failure("expand", &err, json)?;
            return Err(err).with_context(|| format!("failed to expand {}", template));
        }
    };

    for (input, output) in inputs.iter().zip(&outputs) {
        let input = input.path();
        if json {
            emit_event(&ExpansionEvent::new(&input, output))?;
        } else {
            print!("{}", render_expansion(&input, output));
        }
    }

    match check_collisions(inputs.iter().zip(outputs.iter().map(String::as_str))) {
        Ok(set) => {
            if json {
                emit_event(&CompleteEvent::success("expand"))?;
            } else {
                print!("{}", render_collision_free(set.len()));
            }
            Ok(())
        }
        Err(err) => {
            super::report_failure("expand", &err, json)?;
            Err(err.into())
        }
    }
}
