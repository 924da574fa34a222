use criterion::{criterion_group, criterion_main, Criterion};

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use colbench::source::{BatchSource, TableReader};

fn make_table(rows_per_group: usize, groups: usize) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("colbench-bench-{rows_per_group}x{groups}.parquet"));

    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("value", DataType::Float64, false),
    ]));
    let total = rows_per_group * groups;
    let ids = Int64Array::from_iter_values(0..total as i64);
    let values = Float64Array::from_iter_values((0..total).map(|i| (i % 10) as f64));
    let batch =
        RecordBatch::try_new(schema.clone(), vec![Arc::new(ids), Arc::new(values)]).unwrap();

    let props = WriterProperties::builder()
        .set_max_row_group_size(rows_per_group)
        .build();
    let file = fs::File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, Some(props)).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
    path
}

fn drain(mut src: BatchSource) -> usize {
    let mut rows = 0;
    while let Some(batch) = src.pull().unwrap() {
        rows += batch.num_rows();
    }
    rows
}

fn bench_pull_strategies(c: &mut Criterion) {
    let path = make_table(4096, 8);

    c.bench_function("materialized_iterate", |b| {
        // Construction (the bulk read) stays outside the measured loop so
        // this isolates per-batch iteration + export cost.
        b.iter_batched(
            || BatchSource::materialized(&path).unwrap(),
            drain,
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("streaming_end_to_end", |b| {
        b.iter(|| {
            let reader = TableReader::open(&path).unwrap().with_batch_size(4096);
            drain(BatchSource::streaming_from(reader).unwrap())
        })
    });

    c.bench_function("materialized_construct", |b| {
        b.iter(|| BatchSource::materialized(&path).unwrap())
    });
}

criterion_group!(benches, bench_pull_strategies);
criterion_main!(benches);
