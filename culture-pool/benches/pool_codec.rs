use criterion::{black_box, criterion_group, criterion_main, Criterion};
use culture_pool::{encode_two_pass, PoolSink, PoolView};

fn month_names() -> Vec<String> {
	["January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November", "December", ""]
		.iter()
		.map(|s| s.to_string())
		.collect()
}

fn bench_encode(c: &mut Criterion) {
	let months = month_names();
	c.bench_function("encode_months_x32", |b| {
		b.iter(|| {
			encode_two_pass(|sink| {
				for i in 0..32 {
					sink.string(&format!("culture-{i}"))?;
					sink.string_array(black_box(&months))?;
				}
				Ok(())
			})
		})
	});
}

fn bench_decode(c: &mut Criterion) {
	let months = month_names();
	let (off, pool) = match encode_two_pass(|sink| sink.string_array(&months)) {
		Ok(v) => v,
		Err(e) => panic!("encode failed: {e}"),
	};
	c.bench_function("decode_months", |b| {
		b.iter(|| PoolView::new(black_box(&pool)).read_string_array(off))
	});
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
