use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use tracing::info;

use crate::report::Report;
use crate::settings::{OutputFormat, Settings};

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("cannot read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("write error: {0}")]
    Write(io::Error),
}

/// Process exit status: 0 when every name was accepted, 1 when any was
/// rejected, 2 when the check itself failed.
pub fn exit_code(result: &Result<bool, CheckError>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Read one name per line. Trailing `\r` is stripped.
pub fn read_names<R: BufRead>(reader: R, skip_blank_lines: bool) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        if skip_blank_lines && line.is_empty() {
            continue;
        }
        names.push(line);
    }
    Ok(names)
}

/// Open `path` for reading; `-` means stdin.
fn open_input(path: &str) -> io::Result<Box<dyn BufRead>> {
    if path == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

pub fn render(report: &Report, settings: &Settings) -> Result<String, CheckError> {
    match settings.output.format {
        OutputFormat::Text => Ok(report.render_text(settings.output.show_accepted)),
        OutputFormat::Json => {
            let mut json = report.render_json()?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn emit<W: Write>(out: &mut W, report: &Report, settings: &Settings) -> Result<(), CheckError> {
    let rendered = render(report, settings)?;
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CheckError::Write)
}

/// Check names given on the command line. Returns `true` if all were accepted.
pub fn check<W: Write>(
    out: &mut W,
    names: Vec<String>,
    settings: &Settings,
) -> Result<bool, CheckError> {
    let report = Report::check_all(names);
    info!(
        accepted = report.accepted,
        rejected = report.rejected,
        "checked arguments"
    );
    emit(out, &report, settings)?;
    Ok(report.all_accepted())
}

/// Check one name per line from `input_file` (`-` for stdin).
pub fn batch<W: Write>(
    out: &mut W,
    input_file: &str,
    settings: &Settings,
) -> Result<bool, CheckError> {
    let io_err = |source| CheckError::Io {
        path: input_file.to_string(),
        source,
    };
    let reader = open_input(input_file).map_err(io_err)?;
    let names = read_names(reader, settings.input.skip_blank_lines).map_err(io_err)?;
    let report = Report::check_all(names);
    info!(
        input = input_file,
        accepted = report.accepted,
        rejected = report.rejected,
        "checked batch"
    );
    emit(out, &report, settings)?;
    Ok(report.all_accepted())
}
