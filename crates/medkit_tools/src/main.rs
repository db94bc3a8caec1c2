// Landmark point file inspector
// Run with: cargo run --bin ptsinfo -- [--three] [--json] fixed.pts moving.pts [output.tfm]

use anyhow::{bail, Context, Result};
use medkit_core::naming;
use medkit_core::points::{self, Point};
use medkit_math::{vector, Bounds};
use serde::Serialize;

const USAGE: &str = "ptsinfo [--three|-t] [--json] fixed.pts moving.pts [output.tfm]";

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct Args {
    fixed_pts: String,
    moving_pts: String,
    output_tfm: Option<String>,
    three: bool,
    json: bool,
}

impl Args {
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--three" | "-t" => parsed.three = true,
                "--json" => parsed.json = true,
                s if s.starts_with('-') && s.len() > 1 => bail!("unknown option {s}"),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        match (positional.next(), positional.next()) {
            (Some(fixed), Some(moving)) => {
                parsed.fixed_pts = fixed;
                parsed.moving_pts = moving;
            }
            _ => bail!("expected fixed and moving point files"),
        }
        parsed.output_tfm = positional.next();
        if let Some(extra) = positional.next() {
            bail!("unexpected argument {extra}");
        }

        Ok(parsed)
    }

    fn transform_name(&self) -> String {
        self.output_tfm
            .clone()
            .unwrap_or_else(|| naming::transform_name(&self.moving_pts))
    }
}

#[derive(Debug, Serialize)]
struct PointSetReport {
    file: String,
    points: Vec<Point>,
    flattened: Vec<f64>,
    centroid: Option<Point>,
    bounds: Option<Bounds>,
}

#[derive(Debug, Serialize)]
struct Report {
    fixed: PointSetReport,
    moving: PointSetReport,
    residuals: Vec<f64>,
    mean_residual: Option<f64>,
    transform: String,
}

fn point_set(file: &str, three: bool) -> Result<PointSetReport> {
    let mut pts = points::read_points(file).with_context(|| format!("reading {file}"))?;
    if three {
        pts = points::make_points_3d(pts);
    }

    // 2-D landmarks have no z extent, so bounds only cover 3-D sets
    let bounds = pts
        .iter()
        .map(|p| vector::to_dvec3(p))
        .collect::<Result<Vec<_>, _>>()
        .ok()
        .map(Bounds::from_points);

    Ok(PointSetReport {
        file: file.to_string(),
        flattened: points::flatten_point_list(&pts),
        centroid: points::centroid(&pts),
        bounds,
        points: pts,
    })
}

fn build_report(args: &Args) -> Result<Report> {
    let fixed = point_set(&args.fixed_pts, args.three)?;
    let moving = point_set(&args.moving_pts, args.three)?;

    let residuals = points::residuals(&fixed.points, &moving.points);
    let mean_residual = if residuals.is_empty() {
        None
    } else {
        Some(residuals.iter().sum::<f64>() / residuals.len() as f64)
    };

    Ok(Report {
        fixed,
        moving,
        residuals,
        mean_residual,
        transform: args.transform_name(),
    })
}

fn print_point_set(label: &str, set: &PointSetReport) {
    println!("{} points ({}):", label, set.file);
    for p in &set.points {
        println!("  {:?}", p);
    }
    println!("  flattened: {:?}", set.flattened);
    if let Some(c) = &set.centroid {
        println!("  centroid:  {:?}", c);
    }
    if let Some(b) = &set.bounds {
        println!("  bounds:    {:?} {:?}", b.min_corner(), b.max_corner());
    }
}

fn print_report(report: &Report) {
    print_point_set("fixed", &report.fixed);
    println!();
    print_point_set("moving", &report.moving);
    println!();
    println!("residuals: {:?}", report.residuals);
    if let Some(mean) = report.mean_residual {
        println!("mean residual: {:.4}", mean);
    }
    println!("transform: {}", report.transform);
}

fn main() -> Result<()> {
    env_logger::init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: {USAGE}");
            std::process::exit(1);
        }
    };
    log::debug!("{:?}", args);

    let report = build_report(&args)?;
    if report.fixed.points.len() != report.moving.points.len() {
        log::warn!(
            "fixed has {} points, moving has {}",
            report.fixed.points.len(),
            report.moving.points.len()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
