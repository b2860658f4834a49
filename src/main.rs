//! War Room - Launcher
//!
//! ```text
//! war-room variables
//! war-room simulate [name=value ...]
//! war-room protocol <wind> <flood_cm> <temp> <traffic_pct>
//! war-room notify   <wind> <flood_cm> <temp> <traffic_pct>
//! war-room history  [n]
//! war-room audit    [n]
//! ```

use anyhow::{bail, Context, Result};

use war_room_core::constants::{APP_VERSION, HISTORY_VIEW_SIZE};
use war_room_core::logic::audit;
use war_room_core::logic::precog::display_label;
use war_room_core::logic::protocol::{evaluate, load_book};
use war_room_core::logic::session::SessionFeed;
use war_room_core::logic::variables::{self, default_inputs, inputs_from_pairs};
use war_room_core::{IncidentRecorder, JsonFileStore, WarRoomConfig};

const USAGE: &str = "usage: war-room <variables|simulate|protocol|notify|history|audit> [args]";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = WarRoomConfig::from_env();
    log::info!("War Room v{} — data dir {:?}", APP_VERSION, config.data_dir);

    let store = JsonFileStore::new(&config.data_dir);
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => bail!(USAGE),
    };

    match command {
        "variables" => {
            println!("{}", serde_json::to_string_pretty(variables::all())?);
        }
        "simulate" => {
            let mut inputs = default_inputs();
            inputs.extend(parse_assignments(rest)?);

            let recorder = IncidentRecorder::with_limit(&store, config.incident_limit);
            let mut feed = SessionFeed::seeded(&recorder);
            let record = feed.simulate(&recorder, &inputs)?;

            let (label, color) = display_label(record.score_result.score);
            println!("Riesgo: {}% — {} ({})", record.score_result.pct, label, color);
            println!("{}", serde_json::to_string_pretty(&record)?);
            println!("Feed de eventos recientes:");
            for incident in feed.recent(config.feed_size) {
                println!("- {}", incident.feed_line());
            }
        }
        "protocol" => {
            let (wind, flood, temp, traffic) = parse_conditions(rest)?;
            let status = evaluate(wind, flood, temp, traffic);
            println!("{}", status.headline());

            let book = load_book(&store);
            if let (Some(protocol), Some(def)) = (status.protocol, book.for_status(&status)) {
                println!("{} — {}", protocol, def.description);
                println!("- Trigger: {}", def.trigger);
                println!("- Responsables: {}", def.responsible_parties.join(", "));
                for (i, step) in def.steps.iter().enumerate() {
                    println!("{}. {}", i + 1, step);
                }
            }
        }
        "notify" => {
            let (wind, flood, temp, traffic) = parse_conditions(rest)?;
            let status = evaluate(wind, flood, temp, traffic);
            let entry = audit::notify(&store, &status)?;
            println!("{} — {} — {}", entry.timestamp, entry.action, entry.detail);
        }
        "history" => {
            let limit = parse_limit(rest, HISTORY_VIEW_SIZE)?;
            let recorder = IncidentRecorder::with_limit(&store, config.incident_limit);
            let incidents = recorder.recent(limit);
            if incidents.is_empty() {
                println!("No hay incidentes registrados.");
            }
            for incident in incidents {
                println!("{}  {}  {:>3}%  {}", incident.id, incident.timestamp, incident.pct, incident.label);
            }
        }
        "audit" => {
            let limit = parse_limit(rest, 100)?;
            let entries = audit::list_audit(&store, limit);
            if entries.is_empty() {
                println!("No hay logs de auditoría todavía.");
            }
            for entry in entries {
                println!("- {} — {} — {}", entry.timestamp, entry.action, entry.detail);
            }
        }
        other => bail!("unknown command {:?}\n{}", other, USAGE),
    }

    Ok(())
}

/// `name=value` pairs; names must be registered variables
fn parse_assignments(args: &[String]) -> Result<variables::RawInputs> {
    let mut pairs = Vec::with_capacity(args.len());
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .with_context(|| format!("expected name=value, got {:?}", arg))?;
        let value: f64 = value
            .parse()
            .with_context(|| format!("invalid number for {}: {:?}", name, value))?;
        pairs.push((name, value));
    }
    Ok(inputs_from_pairs(pairs)?)
}

fn parse_conditions(args: &[String]) -> Result<(f64, f64, f64, f64)> {
    if args.len() != 4 {
        bail!("expected <wind> <flood_cm> <temp> <traffic_pct>");
    }
    let mut values = [0.0f64; 4];
    for (slot, arg) in values.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .with_context(|| format!("invalid number: {:?}", arg))?;
    }
    Ok((values[0], values[1], values[2], values[3]))
}

fn parse_limit(args: &[String], default: usize) -> Result<usize> {
    match args.first() {
        Some(n) => n.parse().with_context(|| format!("invalid count: {:?}", n)),
        None => Ok(default),
    }
}
