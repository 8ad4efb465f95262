// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, bail, Result};
use notes::config::NotesConfig;
use notes::eval::{evaluate_str, Operand};
use notes::music::{iterate_scales, scales_matching, Matches, Pitch, PitchClass, Scale};
use std::env;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("notes - Pitch, pitch class and scale toolkit");
    println!();
    println!("Usage: notes [--config <PATH>] <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  parse <TEXT>              Identify a pitch class, pitch or scale");
    println!("  scale <SCALE>             List the notes of a scale (Cmaj, Ebm, 8m, ...)");
    println!("  scales                    List all 24 scales with their Traktor codes");
    println!("  traktor <SCALE>           Convert between music and Traktor notation");
    println!("  freq <PITCH>              Print the frequency of a pitch");
    println!("  midi <PITCH>              Print the MIDI code of a pitch");
    println!("  match [--ranked] <NOTES>  Find scales containing the given notes");
    println!("  eval <LHS> <OP> <RHS>     Evaluate +, -, == or != on notes and intervals");
    println!("  --help                    Show this help message");
    println!();
    println!("Set RUST_LOG=debug for diagnostic output.");
}

/// Renders values according to the display settings
struct Printer {
    ascii: bool,
}

impl Printer {
    fn pitch_class(&self, pc: PitchClass) -> String {
        if self.ascii {
            pc.ascii_name().to_string()
        } else {
            pc.to_string()
        }
    }

    fn pitch(&self, pitch: Pitch) -> String {
        format!("{}{}", self.pitch_class(pitch.pitch_class()), pitch.octave())
    }

    fn scale(&self, scale: Scale) -> String {
        format!("{}{}", self.pitch_class(scale.root()), scale.mode())
    }

    fn notes(&self, notes: &[PitchClass]) -> String {
        notes
            .iter()
            .map(|&n| self.pitch_class(n))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn operand(&self, operand: &Operand) -> String {
        match operand {
            Operand::PitchClass(pc) => self.pitch_class(*pc),
            Operand::Pitch(p) => self.pitch(*p),
            Operand::Scale(s) => self.scale(*s),
            other => other.to_string(),
        }
    }
}

fn parse_pitch(text: &str) -> Result<Pitch> {
    Pitch::parse(text).ok_or_else(|| anyhow!("Not a pitch: {}", text))
}

fn parse_scale(text: &str) -> Result<Scale> {
    Ok(text.parse::<Scale>()?)
}

fn required<'a>(args: &'a [String], index: usize, what: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires {}", args[0], what))
}

fn print_scale_row(out: &Printer, scale: Scale) {
    println!(
        "{:<8} {:>4}  {}",
        out.scale(scale),
        scale.to_traktor(),
        out.notes(&scale.notes())
    );
}

fn describe(out: &Printer, config: &NotesConfig, text: &str) {
    match Operand::parse(text) {
        Operand::PitchClass(pc) => {
            println!("pitch class {} (value {})", out.pitch_class(pc), pc.value());
        }
        Operand::Pitch(p) => {
            println!(
                "pitch {} (value {}, MIDI {}, {:.2} Hz)",
                out.pitch(p),
                p.value(),
                p.midi(),
                p.frequency_with(config.tuning.a4_hz)
            );
        }
        Operand::Scale(s) => {
            println!(
                "scale {} [{}] notes: {}",
                out.scale(s),
                s.to_traktor(),
                out.notes(&s.notes())
            );
        }
        Operand::Int(v) => println!("interval of {} semitones", v),
        other => println!("not recognised: {}", other),
    }
}

fn find_matches(out: &Printer, config: &NotesConfig, args: &[String]) -> Result<()> {
    let (perfect, names) = match args.first().map(String::as_str) {
        Some("--ranked") => (false, &args[1..]),
        _ => (config.search.perfect, args),
    };
    if names.is_empty() {
        bail!("match requires at least one note");
    }

    let targets = names
        .iter()
        .map(|n| n.parse::<PitchClass>())
        .collect::<Result<Vec<_>, _>>()?;
    debug!(notes = targets.len(), perfect, "searching scales");

    match scales_matching(targets, perfect) {
        Matches::Perfect(scales) => {
            if scales.is_empty() {
                println!("No scale contains all of these notes");
            }
            for scale in scales {
                print_scale_row(out, scale);
            }
        }
        Matches::Ranked(matches) => {
            for m in matches {
                println!(
                    "{} {:<8} {}",
                    m.count(),
                    out.scale(m.scale),
                    out.notes(&m.matched)
                );
            }
        }
    }
    Ok(())
}

fn run(config: &NotesConfig, args: &[String]) -> Result<()> {
    let out = Printer {
        ascii: config.display.ascii,
    };
    let arg = |i: usize, what: &str| required(args, i, what);

    match args[0].as_str() {
        "parse" => describe(&out, config, arg(1, "some text")?),
        "scale" => {
            let scale = parse_scale(arg(1, "a scale")?)?;
            println!("{}", out.notes(&scale.notes()));
        }
        "scales" => {
            for scale in iterate_scales(config.search.start, None) {
                print_scale_row(&out, scale);
            }
        }
        "traktor" => {
            let text = arg(1, "a scale")?;
            if let Some(scale) = Scale::parse_traktor(text) {
                println!("{}", out.scale(scale));
            } else {
                println!("{}", parse_scale(text)?.to_traktor());
            }
        }
        "freq" => {
            let pitch = parse_pitch(arg(1, "a pitch")?)?;
            println!("{:.4}", pitch.frequency_with(config.tuning.a4_hz));
        }
        "midi" => {
            let pitch = parse_pitch(arg(1, "a pitch")?)?;
            println!("{}", pitch.midi());
        }
        "match" => find_matches(&out, config, &args[1..])?,
        "eval" => {
            let result = evaluate_str(
                arg(1, "a left operand")?,
                arg(2, "an operator")?,
                arg(3, "a right operand")?,
            )?;
            println!("{}", out.operand(&result));
        }
        "--help" | "-h" | "help" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let config = if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            eprintln!("Error: --config requires a file path");
            std::process::exit(1);
        }
        let path = args.remove(1);
        args.remove(0);
        NotesConfig::load(&path)?
    } else {
        NotesConfig::default()
    };

    if args.is_empty() {
        println!("notes - Pitch, pitch class and scale toolkit");
        println!("Run with --help for usage information");
        return Ok(());
    }

    run(&config, &args)
}
