use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shapebox::prelude::{KindMix, ShapeKind};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod summary;

use summary::{run_plan, FillPlan};

#[derive(Parser)]
#[command(name = "shapebox-cli")]
#[command(about = "Fill a fixed-capacity shape box and summarize it")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Fill a box with sampled shapes, apply operations, print a JSON summary
    Fill {
        #[arg(long)]
        capacity: usize,
        /// Number of shapes to offer; anything past capacity is rejected
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Kinds::All)]
        kinds: Kinds,
        /// Extract the shape at this index (repeatable, applied in order)
        #[arg(long, allow_negative_numbers = true)]
        extract: Vec<i64>,
        /// Remove every circle after filling and extracting
        #[arg(long)]
        remove_circles: bool,
        /// Also write the summary here, with a provenance sidecar
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kinds {
    All,
    NoCircles,
    Circle,
    Square,
    Rectangle,
    Triangle,
}

impl From<Kinds> for KindMix {
    fn from(k: Kinds) -> Self {
        match k {
            Kinds::All => KindMix::All,
            Kinds::NoCircles => KindMix::NoCircles,
            Kinds::Circle => KindMix::Only(ShapeKind::Circle),
            Kinds::Square => KindMix::Only(ShapeKind::Square),
            Kinds::Rectangle => KindMix::Only(ShapeKind::Rectangle),
            Kinds::Triangle => KindMix::Only(ShapeKind::Triangle),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Fill {
            capacity,
            count,
            seed,
            kinds,
            extract,
            remove_circles,
            out,
        } => {
            let plan = FillPlan {
                capacity,
                count,
                seed,
                kinds: kinds.into(),
                extract,
                remove_circles,
            };
            fill(plan, out)
        }
        Action::Report => report(),
    }
}

fn fill(plan: FillPlan, out: Option<String>) -> Result<()> {
    tracing::info!(
        capacity = plan.capacity,
        count = plan.count,
        seed = plan.seed,
        "fill"
    );
    let summary = run_plan(&plan);
    if summary.kinds.values().sum::<usize>() != summary.len {
        bail!("per-kind counts do not add up to the box length");
    }
    if summary.len + summary.remaining + summary.removed != summary.capacity {
        bail!("capacity accounting does not balance");
    }
    let text = serde_json::to_string_pretty(&summary)?;
    println!("{text}");

    if let Some(out) = out {
        let out_path = Path::new(&out);
        provenance::ensure_parent(out_path)?;
        std::fs::write(out_path, &text).with_context(|| format!("writing {out}"))?;
        let params = serde_json::json!({
            "capacity": plan.capacity,
            "count": plan.count,
            "seed": plan.seed,
            "kinds": format!("{:?}", plan.kinds),
            "extract": plan.extract,
            "remove_circles": plan.remove_circles,
        });
        let sidecar = provenance::write_sidecar(out_path, params)?;
        tracing::info!(out, sidecar = %sidecar.display(), "wrote summary");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": shapebox::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fill_with_negative_extract() {
        let cmd = Cmd::try_parse_from([
            "shapebox-cli",
            "fill",
            "--capacity",
            "2",
            "--count",
            "3",
            "--kinds",
            "no-circles",
            "--extract",
            "-1",
            "--extract",
            "0",
        ])
        .unwrap();
        match cmd.action {
            Action::Fill {
                capacity,
                extract,
                kinds,
                ..
            } => {
                assert_eq!(capacity, 2);
                assert_eq!(extract, vec![-1, 0]);
                assert_eq!(KindMix::from(kinds), KindMix::NoCircles);
            }
            Action::Report => panic!("expected fill"),
        }
    }

    #[test]
    fn fill_writes_summary_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("runs").join("box.json");
        let plan = FillPlan {
            capacity: 3,
            count: 3,
            seed: 9,
            kinds: KindMix::All,
            extract: vec![1],
            remove_circles: false,
        };
        fill(plan, Some(out.to_string_lossy().into_owned())).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["len"], 2);
        assert_eq!(parsed["removed"], 1);
        assert!(dir.path().join("runs").join("box.provenance.json").exists());
    }
}
