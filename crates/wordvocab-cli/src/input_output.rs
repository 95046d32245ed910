use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Open a reader for a file path; "-" reads stdin.
pub fn open_path_reader(path: &str) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
    InputArgs {
        input: Some(path.to_string()),
    }
    .open_reader()
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(
                File::open(&p).map_err(|e| format!("failed to open {p}: {e}"))?,
            )),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn std::io::Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(
                File::create(&p).map_err(|e| format!("failed to create {p}: {e}"))?,
            )),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Read up to `limit` lines, without their line endings.
///
/// ## Returns
/// An empty batch at end of input.
pub fn read_line_batch(
    reader: &mut dyn BufRead,
    limit: usize,
) -> std::io::Result<Vec<String>> {
    let mut batch = Vec::new();
    let mut line = String::new();
    while batch.len() < limit {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        batch.push(trimmed.to_string());
    }
    Ok(batch)
}
