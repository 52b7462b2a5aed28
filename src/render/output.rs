use serde::Serialize;

use crate::{
    config::{OutputConfig, OutputFormat},
    render::color::{ansi_for, colorize},
    types::RenderedOutput,
};

const SEPARATOR: &str = " | ";

/// One entry of an i3bar status line.
#[derive(Debug, Serialize)]
struct I3barBlock<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance: Option<&'a str>,
    markup: &'static str,
    full_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

/// Turns the blocks of one pass into a single status line.
pub fn format_status_line(
    outputs: &[RenderedOutput],
    config: &OutputConfig,
) -> Result<String, serde_json::Error> {
    match config.format {
        OutputFormat::I3bar => format_i3bar(outputs, config),
        OutputFormat::Term => Ok(format_term(outputs, config.color_enabled)),
        OutputFormat::Plain => Ok(format_term(outputs, false)),
    }
}

fn format_i3bar(
    outputs: &[RenderedOutput],
    config: &OutputConfig,
) -> Result<String, serde_json::Error> {
    let blocks: Vec<I3barBlock<'_>> = outputs
        .iter()
        .map(|output| I3barBlock {
            name: output.name,
            instance: output.instance.as_deref(),
            markup: "none",
            full_text: &output.full_text,
            color: output
                .color
                .filter(|_| config.color_enabled)
                .map(|tag| config.palette.hex_for(tag)),
        })
        .collect();
    serde_json::to_string(&blocks)
}

fn format_term(outputs: &[RenderedOutput], color_enabled: bool) -> String {
    outputs
        .iter()
        .map(|output| match output.color {
            Some(tag) => colorize(&output.full_text, ansi_for(tag), color_enabled),
            None => output.full_text.clone(),
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
