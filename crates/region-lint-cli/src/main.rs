use anyhow::{Context, Result};
use region_lint_config::{Config, PROJECT_CONFIG_FILE};
use region_lint_engine::{AnalyzerOptions, FileFilter, FileReport, LineIndex, io};
use relative_path::RelativePathBuf;
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "Usage: region-lint [--config <file>] [--init] [path]";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    path: PathBuf,
    config: Option<PathBuf>,
    init: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut path = None;
    let mut config = None;
    let mut init = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter.next().ok_or("--config needs a file argument")?;
                config = Some(Config::expand_path(Path::new(value)).unwrap_or_else(|| value.into()));
            }
            "--init" => init = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {flag}")),
            value if path.is_none() => path = Some(PathBuf::from(value)),
            value => return Err(format!("Unexpected argument: {value}")),
        }
    }

    Ok(Args {
        path: path.unwrap_or_else(|| PathBuf::from(".")),
        config,
        init,
    })
}

/// What to analyse: a root directory and the files under it.
struct Target {
    root: PathBuf,
    files: Option<Vec<RelativePathBuf>>,
}

impl Target {
    fn resolve(path: &Path) -> Result<Self> {
        if path.is_file() {
            let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("Unsupported file name: {}", path.display()))?;
            return Ok(Self {
                root,
                files: Some(vec![RelativePathBuf::from(name)]),
            });
        }

        io::validate_root(path)?;
        Ok(Self {
            root: path.to_path_buf(),
            files: None,
        })
    }
}

fn load_config(args: &Args, root: &Path) -> Result<Config> {
    match &args.config {
        Some(config_path) => Config::load_from_path(config_path)?
            .with_context(|| format!("Config file not found: {}", config_path.display())),
        None => Ok(Config::discover(root)?),
    }
}

fn render_report(report: &FileReport, root: &Path) -> Vec<String> {
    let index = LineIndex::new(&report.source);
    let path = report.path.to_path(root);

    report
        .findings
        .iter()
        .map(|finding| {
            let position = index.line_col(finding.range.start());
            format!(
                "{}:{}:{}: {} {}",
                path.display(),
                position.line,
                position.column,
                finding.rule,
                finding.message()
            )
        })
        .collect()
}

/// Analyse the target and print findings. Returns the number of findings.
fn run(args: &Args) -> Result<usize> {
    let target = Target::resolve(&args.path)?;
    let config = load_config(args, &target.root)?;
    log::debug!("using config {config:?}");

    if args.init {
        let config_file = target.root.join(PROJECT_CONFIG_FILE);
        config
            .save_to_path(&config_file)
            .with_context(|| format!("Failed to write {}", config_file.display()))?;
        println!("Wrote {}", config_file.display());
        return Ok(0);
    }

    let options = AnalyzerOptions {
        comment_markers: config.comment_markers,
        report_unterminated: config.report_unterminated,
    };

    let files = match target.files {
        Some(files) => files,
        None => {
            let filter = FileFilter::new(&config.include, &config.exclude)?;
            io::scan_source_files(&target.root, &filter)?
        }
    };
    log::info!("analysing {} files under {}", files.len(), target.root.display());

    let mut total = 0;
    let mut affected = 0;
    for file in &files {
        let report = io::analyze_file(file, &target.root, &options)
            .with_context(|| format!("Failed to analyse {file}"))?;
        if !report.findings.is_empty() {
            affected += 1;
            total += report.findings.len();
        }
        for line in render_report(&report, &target.root) {
            println!("{line}");
        }
    }

    println!(
        "{total} region(s) within element bodies in {affected} of {} file(s)",
        files.len()
    );
    Ok(total)
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    match run(&args) {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }
}
