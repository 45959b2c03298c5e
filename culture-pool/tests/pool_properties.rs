use culture_pool::{encode_two_pass, PoolOffset, PoolSink, PoolSizer, PoolView, PoolWriter};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
	prop_oneof![
		Just(String::new()),
		"[a-zA-Z]{1,3}",
		"\\PC{0,24}",
		prop::sample::select(vec!["Montag".to_string(), "月曜日".to_string(), "Понедельник".to_string()]),
	]
}

#[derive(Debug, Clone)]
enum Value {
	Str(String),
	Strs(Vec<String>),
	Words(Vec<u16>),
}

fn value() -> impl Strategy<Value = Value> {
	prop_oneof![
		text().prop_map(Value::Str),
		prop::collection::vec(text(), 0..8).prop_map(Value::Strs),
		prop::collection::vec(0u16..10, 0..5).prop_map(Value::Words),
	]
}

fn place(sink: &mut dyn PoolSink, v: &Value) -> culture_pool::Result<PoolOffset> {
	match v {
		Value::Str(s) => sink.string(s),
		Value::Strs(items) => sink.string_array(items),
		Value::Words(w) => sink.word_array(w),
	}
}

proptest! {
	#[test]
	fn prop_sizing_then_filling_roundtrips(values in prop::collection::vec(value(), 0..24)) {
		let mut sizer = PoolSizer::new();
		for v in &values {
			place(&mut sizer, v).unwrap();
		}
		let (offsets, pool) = encode_two_pass(|sink| values.iter().map(|v| place(sink, v)).collect::<Result<Vec<_>, _>>()).unwrap();
		prop_assert_eq!(pool.len(), sizer.len());
		let view = PoolView::new(&pool);
		for (v, off) in values.iter().zip(offsets) {
			match v {
				Value::Str(s) => prop_assert_eq!(&view.read_string(off).unwrap(), s),
				Value::Strs(items) => prop_assert_eq!(&view.read_string_array(off).unwrap(), items),
				Value::Words(w) => prop_assert_eq!(&view.read_word_array(off).unwrap(), w),
			}
		}
	}

	#[test]
	fn prop_cursor_odd_after_every_write(values in prop::collection::vec(value(), 1..16)) {
		let mut writer = PoolWriter::new();
		for v in &values {
			place(&mut writer, v).unwrap();
			prop_assert_eq!(writer.len() % 2, 1);
		}
	}

	#[test]
	fn prop_duplicate_strings_pooled_once(s in "[a-z]{1,12}", filler in prop::collection::vec("[A-Z]{1,4}", 0..4)) {
		let mut writer = PoolWriter::new();
		let first = writer.write_string(&s).unwrap();
		for f in &filler {
			writer.write_string(f).unwrap();
		}
		let len = writer.len();
		let second = writer.write_string(&s).unwrap();
		prop_assert_eq!(first, second);
		prop_assert_eq!(writer.len(), len);
		let needle: Vec<u16> = s.encode_utf16().collect();
		let copies = writer.as_words().windows(needle.len()).filter(|w| *w == needle.as_slice()).count();
		prop_assert_eq!(copies, 1);
	}
}

#[test]
fn alignment_for_lengths_zero_to_three() {
	for len in 0..4usize {
		let mut writer = PoolWriter::new();
		let s = "x".repeat(len);
		writer.write_string(&s).unwrap();
		assert_eq!(writer.len() % 2, 1, "string of length {len}");
		writer.write_string_array(&[s.clone(), format!("{s}y")]).unwrap();
		assert_eq!(writer.len() % 2, 1, "array after string of length {len}");
	}
}
