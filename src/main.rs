use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::exit;
use timebins::{html, process, write, Error};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

struct Args {
    source_path: PathBuf,
    dest_dir: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} --source-path <HTML_FILE> [--dest-dir <DIR>]\n\
         \n\
         Read an energyplus html summary file and export time bin tables.\n\
         \n\
         \x20 -i, --source-path   path to the eplustbl.htm summary file\n\
         \x20 -o, --dest-dir      directory for the csv output (default: next to the source file)"
    )
}

fn parse_args() -> Result<Args> {
    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "timebins".to_string());
    let mut source_path = None;
    let mut dest_dir = None;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-i" | "--source-path" => {
                let value = argv.next().context("missing value for --source-path")?;
                source_path = Some(PathBuf::from(value));
            }
            "-o" | "--dest-dir" => {
                let value = argv.next().context("missing value for --dest-dir")?;
                dest_dir = Some(PathBuf::from(value));
            }
            "-h" | "--help" => {
                println!("{}", usage(&program));
                exit(0);
            }
            other => {
                eprintln!("unknown argument: {other}\n{}", usage(&program));
                exit(1);
            }
        }
    }

    match source_path {
        Some(source_path) => Ok(Args {
            source_path,
            dest_dir,
        }),
        None => {
            eprintln!("{}", usage(&program));
            exit(1);
        }
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = parse_args()?;
    let dest_dir = args.dest_dir.unwrap_or_else(|| {
        args.source_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    });
    std::fs::create_dir_all(&dest_dir)
        .with_context(|| format!("creating output directory {}", dest_dir.display()))?;

    let tables = html::read_html(&args.source_path)?;
    match process::process_time_bins(tables) {
        Ok(distributions) => {
            let paths = write::write_tables(&distributions, &dest_dir)?;
            let names = distributions
                .iter()
                .map(|d| d.name())
                .collect::<Vec<_>>()
                .join("\n - ");
            info!(
                directory = %dest_dir.display(),
                files = paths.len(),
                "bins successfully extracted:\n - {names}"
            );
            Ok(())
        }
        // a report without a time bin section is a legitimate input,
        // not a failed run
        Err(Error::NoTemperatureDistribution) => {
            info!(
                "file '{}' does not include temperature distribution time bins",
                args.source_path.display()
            );
            Ok(())
        }
        Err(err) => Err(err).context("extracting time bins"),
    }
}
