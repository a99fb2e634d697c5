//! lathe CLI - revolve edge profiles into triangle meshes
//!
//! Reads a job file (profile edges plus sweep parameters), runs the
//! revolve pipeline, and writes STL or OBJ.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lathe_chain::trace_edges;
use lathe_revolve::revolve_edges;

mod job;

use job::RevolveJob;

#[derive(Parser)]
#[command(name = "lathe")]
#[command(about = "Revolve edge profiles around an axis into triangle meshes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Revolve a job's profile and write the mesh
    Revolve {
        /// Job file (.toml or .json)
        job: PathBuf,
        /// Output file (format determined by extension: .stl, .obj)
        #[arg(short, long)]
        output: PathBuf,
        /// Override the sweep angle in degrees
        #[arg(long)]
        angle: Option<f64>,
        /// Override the number of angular segments
        #[arg(long)]
        segments: Option<u32>,
    },
    /// Print the chains traced from a job's edges
    Chains {
        /// Job file (.toml or .json)
        job: PathBuf,
    },
    /// Summarize a job and the mesh it produces
    Info {
        /// Job file (.toml or .json)
        job: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Revolve {
            job,
            output,
            angle,
            segments,
        } => {
            let mut job = RevolveJob::load(&job)?;
            if let Some(angle) = angle {
                job.params.angle = angle;
            }
            if let Some(segments) = segments {
                job.params.segments = segments;
            }
            revolve_to_file(&job, &output)?;
        }
        Commands::Chains { job } => {
            show_chains(&RevolveJob::load(&job)?);
        }
        Commands::Info { job } => {
            show_info(&RevolveJob::load(&job)?)?;
        }
    }

    Ok(())
}

fn revolve_to_file(job: &RevolveJob, output: &Path) -> Result<()> {
    let ext = output.extension().and_then(|e| e.to_str()).unwrap_or("");
    let ext = ext.to_lowercase();
    if ext != "stl" && ext != "obj" {
        bail!("Unknown output format: {}", ext);
    }

    let mesh = revolve_edges(&job.all_edges(), &job.params).context("revolve failed")?;

    let file = File::create(output).with_context(|| format!("creating {}", output.display()))?;
    let writer = BufWriter::new(file);
    match ext.as_str() {
        "stl" => lathe_mesh::write_stl(&mesh, writer)?,
        _ => lathe_mesh::write_obj(&mesh, writer)?,
    }
    tracing::info!(
        triangles = mesh.num_triangles(),
        path = %output.display(),
        "wrote mesh"
    );
    Ok(())
}

fn show_chains(job: &RevolveJob) {
    let tol = job.params.tolerance;
    let chains = trace_edges(&job.all_edges());
    println!("{} chain(s)", chains.len());
    for (i, chain) in chains.iter().enumerate() {
        let kind = if chain.is_closed(&tol) { "closed" } else { "open" };
        println!("  [{i}] {kind}, {} points", chain.len());
        for p in chain.points() {
            println!("      ({:.4}, {:.4}, {:.4})", p.x, p.y, p.z);
        }
    }
}

fn show_info(job: &RevolveJob) -> Result<()> {
    let edges = job.all_edges();
    let params = &job.params;
    println!("Edges:    {}", edges.len());
    println!("Angle:    {}°", params.angle);
    println!("Segments: {}", params.segment_count());

    let mesh = revolve_edges(&edges, params)?;
    println!("Triangles: {}", mesh.num_triangles());
    println!("Volume:    {:.6}", mesh.signed_volume().abs());
    Ok(())
}
