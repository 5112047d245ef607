use log::info;

use crate::bench::benchmark_with_warmup;
use crate::{ApproachReport, BenchConfig, BenchmarkReport, Document, Layout};

/// Benchmark both layouts for the configured record type.
///
/// An untimed lookup against each document is made first and its result is
/// what the report shows as the retrieved TTL. The array form is then timed,
/// followed by the object form. The report header takes the RDAP
/// `objectClassName` and `ldhName` from the array document, falling back to
/// the object document. The documents are only borrowed; the config's paths
/// are not read here.
pub fn compare(config: &BenchConfig, array: &Document, object: &Document) -> BenchmarkReport {
    let record_type = config.record_type();
    let array_ttl = (Layout::Array.strategy())(array.root(), record_type);
    let object_ttl = (Layout::Object.strategy())(object.root(), record_type);

    let array_report = run(Layout::Array, array, array_ttl, config);
    let object_report = run(Layout::Object, object, object_ttl, config);

    let report = BenchmarkReport::new(
        record_type,
        config.iterations(),
        array_report,
        object_report,
    )
    .with_subject(
        array.object_class_name().or(object.object_class_name()),
        array.ldh_name().or(object.ldh_name()),
    );
    match report.speedup() {
        Some(s) => info!("'{record_type}': object form is {s:.2}x faster"),
        None => info!("'{record_type}': object form time too small to compare"),
    }
    report
}

fn run(layout: Layout, doc: &Document, ttl: Option<i64>, config: &BenchConfig) -> ApproachReport {
    let strategy = layout.strategy();
    let root = doc.root();
    info!(
        "timing {layout} lookup of '{}' ({} iterations, {} warm-up)",
        config.record_type(),
        config.iterations(),
        config.warmup()
    );
    let sample = benchmark_with_warmup(
        |record_type| strategy(root, record_type),
        config.record_type(),
        config.iterations(),
        config.warmup(),
    );
    ApproachReport::new(layout, ttl, &sample)
}
