//! Read-back queries used by the seeding summaries and the audit.

use anyhow::{Context, Result};
use bson::{Bson, Document};
use futures::TryStreamExt;
use mongodb::Collection;

/// Render a distinct value the way it should read in a report.
pub fn label(value: &Bson) -> String {
	match value {
		Bson::String(s) => s.clone(),
		Bson::Null => String::from("(none)"),
		other => other.to_string(),
	}
}

/// Numeric field of an aggregation result, whatever width the server chose.
pub fn number(doc: &Document, key: &str) -> f64 {
	match doc.get(key) {
		Some(Bson::Int32(n)) => f64::from(*n),
		Some(Bson::Int64(n)) => *n as f64,
		Some(Bson::Double(n)) => *n,
		_ => 0.0,
	}
}

/// Count documents per distinct value of `field`, largest group first.
pub async fn count_by(coll: &Collection<Document>, field: &str, filter: Option<Document>) -> Result<Vec<(String, u64)>> {
	let values = coll
		.distinct(field, filter.clone(), None)
		.await
		.with_context(|| format!("listing distinct {}.{field}", coll.name()))?;

	let mut counts = Vec::with_capacity(values.len());
	for value in values {
		let mut query = filter.clone().unwrap_or_default();
		query.insert(field, value.clone());
		let n = coll
			.count_documents(query, None)
			.await
			.with_context(|| format!("counting {}.{field}", coll.name()))?;
		counts.push((label(&value), n));
	}
	counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
	Ok(counts)
}

pub async fn count(coll: &Collection<Document>, filter: Option<Document>) -> Result<u64> {
	coll.count_documents(filter, None)
		.await
		.with_context(|| format!("counting {}", coll.name()))
}

pub async fn aggregate(coll: &Collection<Document>, pipeline: Vec<Document>) -> Result<Vec<Document>> {
	coll.aggregate(pipeline, None)
		.await
		.with_context(|| format!("aggregating {}", coll.name()))?
		.try_collect()
		.await
		.with_context(|| format!("reading aggregation over {}", coll.name()))
}

pub fn print_counts(title: &str, counts: &[(String, u64)]) {
	println!("{title}:");
	for (value, n) in counts {
		println!("  - {value}: {n}");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bson::doc;

	#[test]
	fn numbers_of_any_width_are_read() {
		let doc = doc! { "a": 3_i32, "b": 4_i64, "c": 2.5, "d": "x" };
		assert_eq!(number(&doc, "a"), 3.0);
		assert_eq!(number(&doc, "b"), 4.0);
		assert_eq!(number(&doc, "c"), 2.5);
		assert_eq!(number(&doc, "d"), 0.0);
		assert_eq!(number(&doc, "missing"), 0.0);
	}

	#[test]
	fn labels_strip_string_quotes() {
		assert_eq!(label(&Bson::String(String::from("ACTIVE"))), "ACTIVE");
		assert_eq!(label(&Bson::Boolean(true)), "true");
		assert_eq!(label(&Bson::Null), "(none)");
	}
}
