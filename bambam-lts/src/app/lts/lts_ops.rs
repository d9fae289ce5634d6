use super::{read_ops, LtsOutput, LtsWriter};
use crate::{
    algorithm::{
        aggregation::{self, ClassificationSummary},
        classification,
        graph_filter::{FilterSummary, GraphFilter},
    },
    config::LtsConfiguration,
    model::{
        graph::EdgeRow,
        lts::LtsError,
        way::{LtsWay, RawWayRow},
    },
};
use kdam::tqdm;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LtsRunSummary {
    pub classification: ClassificationSummary,
    pub filter: FilterSummary,
}

/// runs LTS classification over a ways file and applies the result to the
/// graph in an edges file, writing all outputs to `output_directory`.
///
/// # Arguments
///
/// * `ways_file` - CSV of tagged OSM ways, optionally gzipped
/// * `edges_file` - CSV of graph edges referencing the ways by id, optionally gzipped
/// * `output_directory` - directory for the way and edge LTS outputs
/// * `conf` - run configuration, validated before any file is read
pub fn run_lts(
    ways_file: &Path,
    edges_file: &Path,
    output_directory: &Path,
    conf: &LtsConfiguration,
) -> Result<LtsRunSummary, LtsError> {
    conf.validate()?;
    log::info!(
        "running {} LTS with {} output at threshold {}",
        conf.lts_method,
        conf.output_method,
        conf.lts_threshold
    );

    let (rows, n_unreadable_ways): (Vec<RawWayRow>, usize) =
        read_ops::read_csv(ways_file, "read ways")?;
    let (ways, n_invalid) = build_ways(&rows, conf.ignore_invalid_entries)?;
    let classifier = classification::build_classifier(conf.lts_method, &ways, conf.missing_tolerance)?;
    let classified = aggregation::classify_ways(&*classifier, &ways, conf.parallelize)?;
    let mut classification_summary = classified.summary;
    classification_summary.n_ways += n_invalid + n_unreadable_ways;
    classification_summary.n_invalid_tag += n_invalid + n_unreadable_ways;
    log::info!("{classification_summary}");

    let (edges, n_unreadable_edges): (Vec<EdgeRow>, usize) =
        read_ops::read_csv(edges_file, "read edges")?;
    let filter = GraphFilter::from(conf);
    let (lts_edges, mut filter_summary) = filter.apply(edges, &classified.lookup)?;
    filter_summary.n_edges += n_unreadable_edges;
    filter_summary.n_dropped_invalid += n_unreadable_edges;
    log::info!("{filter_summary}");

    let output = LtsOutput {
        ways: classified.ways,
        edges: lts_edges,
    };
    output.write_lts(output_directory, conf.overwrite)?;

    Ok(LtsRunSummary {
        classification: classification_summary,
        filter: filter_summary,
    })
}

/// normalizes the raw rows, excluding rows with invalid tags. returns the
/// ways along with the count of excluded rows.
pub fn build_ways(
    rows: &[RawWayRow],
    ignore_invalid_entries: bool,
) -> Result<(Vec<LtsWay>, usize), LtsError> {
    let mut ways = Vec::with_capacity(rows.len());
    let mut n_invalid = 0;
    let iter = tqdm!(rows.iter(), total = rows.len(), desc = "normalize way tags");
    for row in iter {
        match LtsWay::new(row, ignore_invalid_entries) {
            Ok(way) => ways.push(way),
            Err(e) if e.is_data_error() => {
                log::warn!("excluding way: {e}");
                n_invalid += 1;
            }
            Err(e) => return Err(e),
        }
    }
    eprintln!();
    Ok((ways, n_invalid))
}
