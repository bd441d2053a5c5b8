use anyhow::Result;
use colored::*;
use serde::Serializer as _;
use std::io::{self, Write};

use crate::draw::Tally;
use crate::types::{CatKind, Draw};

// Output draws as a JSON array, streamed one element at a time
pub fn output_json<W: Write>(out: &mut W, draws: impl Iterator<Item = Draw>) -> Result<()> {
    let mut serializer = serde_json::Serializer::pretty(&mut *out);
    (&mut serializer).collect_seq(draws).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

// Output draws as text, one line each, counting them as they go by
pub fn output_text<W: Write>(out: &mut W, draws: impl Iterator<Item = Draw>) -> Result<Tally> {
    let mut tally = Tally::default();
    for draw in draws {
        writeln!(out, "{}", format_draw(&draw))?;
        tally.record(draw.cat);
    }
    Ok(tally)
}

// Summary of how often each cat came up
pub fn output_tally<W: Write>(out: &mut W, tally: &Tally) -> Result<()> {
    writeln!(out)?;
    for (kind, count) in tally.iter() {
        writeln!(out, "  {}: {}", paint(kind, kind.type_name()), count)?;
    }
    Ok(())
}

pub fn format_draw(draw: &Draw) -> String {
    format!("Hey, {} - {}", paint(draw.cat, &draw.type_name), draw.action)
}

fn paint(kind: CatKind, name: &str) -> ColoredString {
    match kind {
        CatKind::Play => name.yellow().bold(),
        CatKind::Hunter => name.red().bold(),
        CatKind::Clean => name.cyan().bold(),
    }
}
