use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::{extract::Extractor, stats::AnalysisResult, stats::IpCounts, Args};

/// Running tally over a stream of lines.
pub struct Aggregator<'e> {
    extractor: &'e Extractor,
    result: AnalysisResult,
}

impl<'e> Aggregator<'e> {
    pub fn new(extractor: &'e Extractor) -> Self {
        Self {
            extractor,
            result: AnalysisResult::default(),
        }
    }

    pub fn feed_line(&mut self, line: &str) {
        let stats = &mut self.result.stats;
        stats.lines_scanned += 1;

        for candidate in self.extractor.lexical_matches(line) {
            stats.candidates_matched += 1;
            if self.extractor.accepts(candidate) {
                self.result.counts.record(candidate);
            } else {
                stats.candidates_rejected += 1;
            }
        }
    }

    pub fn finish(self) -> AnalysisResult {
        self.result
    }
}

pub fn aggregate_lines<I, S>(lines: I, extractor: &Extractor) -> IpCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = Aggregator::new(extractor);
    for line in lines {
        aggregator.feed_line(line.as_ref());
    }
    aggregator.finish().counts
}

pub fn scan_reader<R: BufRead>(mut reader: R, extractor: &Extractor) -> Result<AnalysisResult> {
    let mut aggregator = Aggregator::new(extractor);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }

        // Undecodable bytes become U+FFFD, which is never part of a match.
        let line: Cow<'_, str> = String::from_utf8_lossy(&buf);
        aggregator.feed_line(&line);
    }

    Ok(aggregator.finish())
}

pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            info!(action = "open", component = "input", file_path = ?path, "Reading input from file");
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {:?}", path))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            info!(action = "open", component = "input", "Reading input from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

pub fn analyze_input(args: &Args) -> Result<AnalysisResult> {
    let start_time = Instant::now();
    let extractor = Extractor::new(args.is_strict())?;
    info!(
        action = "start",
        component = "analysis",
        strict = extractor.is_strict(),
        "Starting address scan"
    );

    let reader = open_input(args.file.as_deref())?;
    let result = scan_reader(reader, &extractor)?;

    let stats = &result.stats;
    info!(
        action = "complete",
        component = "analysis",
        lines_scanned = stats.lines_scanned,
        candidates_matched = stats.candidates_matched,
        candidates_rejected = stats.candidates_rejected,
        unique_addresses = result.counts.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Address scan completed"
    );

    Ok(result)
}
