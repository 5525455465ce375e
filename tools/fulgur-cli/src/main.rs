//! Command-line encoder and decoder for Fulgur TLV streams.

use std::error::Error as StdError;

use bytes::Bytes;
use clap::{Parser, Subcommand};
use fulgur::{build_container, encode_one, parse_all, TlvNode};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "fulgur-cli", version, about = "Encode and decode Fulgur TLV streams")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a hex-encoded TLV stream and list its top-level elements.
    Decode {
        /// Hex-encoded TLV bytes, e.g. 010548656c6c6f
        input: String,
    },
    /// Encode a single element and print its canonical hex form.
    Encode {
        /// Tag number (decimal, or hex with an 0x prefix)
        #[arg(long, value_parser = parse_tag_arg)]
        tag: u16,
        /// Value given as UTF-8 text
        #[arg(long, conflicts_with = "value_hex")]
        utf8: Option<String>,
        /// Value given as hex bytes
        #[arg(long = "hex", conflicts_with = "utf8")]
        value_hex: Option<String>,
    },
    /// Wrap a hex-encoded sibling stream under a container tag.
    Wrap {
        /// Container tag (decimal, or hex with an 0x prefix)
        #[arg(long, value_parser = parse_tag_arg)]
        tag: u16,
        /// Hex-encoded stream of child elements
        input: String,
    },
}

fn parse_tag_arg(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u16::from_str_radix(digits, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid tag {s:?}: {e}"))
}

fn print_node(node: &TlvNode) {
    match node.value_utf8() {
        Some(text) if !text.is_empty() && text.chars().all(|c| !c.is_control()) => {
            println!("tag=0x{:04X} len={} value=\"{}\"", node.tag(), node.len(), text);
        }
        _ => {
            println!(
                "tag=0x{:04X} len={} value={}",
                node.tag(),
                node.len(),
                hex::encode(node.value())
            );
        }
    }
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
    match cli.command {
        Command::Decode { input } => {
            let data = Bytes::from(hex::decode(input.trim())?);
            for node in &parse_all(&data)? {
                print_node(node);
            }
        }
        Command::Encode {
            tag,
            utf8,
            value_hex,
        } => {
            let value = if let Some(text) = utf8 {
                Bytes::from(text.into_bytes())
            } else if let Some(digits) = value_hex {
                Bytes::from(hex::decode(digits.trim())?)
            } else {
                Bytes::new()
            };
            let node = TlvNode::new(tag, value);
            println!("{}", hex::encode(encode_one(&node)?));
        }
        Command::Wrap { tag, input } => {
            let data = Bytes::from(hex::decode(input.trim())?);
            let children = parse_all(&data)?;
            debug!(children = children.len(), "wrapping sibling stream");
            let container = build_container(tag, &children)?;
            println!("{}", hex::encode(encode_one(&container)?));
        }
    }
    Ok(())
}
