//! Tree-view inspector for Fulgur TLV dumps.
//!
//! Which tags hold nested streams is protocol convention, so the tree
//! shape is driven by the repeatable `--container` flag rather than
//! guessed from the bytes.

use std::error::Error as StdError;
use std::io::Read;

use bytes::Bytes;
use clap::Parser;
use fulgur::{parse_all, parse_nested, TlvNode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "fulgur-inspector",
    version,
    about = "Render a Fulgur TLV dump as a tree"
)]
struct Cli {
    /// Hex-encoded TLV stream; reads stdin when omitted.
    input: Option<String>,

    /// Tag to treat as a container and recurse into (repeatable).
    #[arg(long = "container", value_parser = parse_tag_arg)]
    containers: Vec<u16>,
}

fn parse_tag_arg(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u16::from_str_radix(digits, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid tag {s:?}: {e}"))
}

fn render(node: &TlvNode, depth: usize, containers: &[u16]) -> fulgur::Result<()> {
    let indent = "  ".repeat(depth);
    if containers.contains(&node.tag()) {
        println!(
            "{indent}tag=0x{:04X} len={} (container)",
            node.tag(),
            node.len()
        );
        for child in parse_nested(node)? {
            render(&child, depth + 1, containers)?;
        }
    } else {
        let rendered = match node.value_utf8() {
            Some(text) if !text.is_empty() && text.chars().all(|c| !c.is_control()) => {
                format!("\"{text}\"")
            }
            _ => hex::encode(node.value()),
        };
        println!(
            "{indent}tag=0x{:04X} len={} value={}",
            node.tag(),
            node.len(),
            rendered
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn StdError>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fulgur=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let input = match cli.input {
        Some(given) => given,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let data = Bytes::from(hex::decode(input.trim())?);
    for node in &parse_all(&data)? {
        render(node, 0, &cli.containers)?;
    }
    Ok(())
}
