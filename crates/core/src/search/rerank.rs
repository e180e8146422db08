//! Post-processing applied to the fuzzy engine's ranking.
//!
//! The engine's score stays the primary signal. Two rules override it: a hit
//! whose term equals the query goes first, and failing that, a hit whose
//! coordinates equal a `lat,lng` query goes first. The list is then capped.

use crate::destinations::{Destination, fold_term};

/// Maximum number of suggestions shown for a query.
pub const MAX_SUGGESTIONS: usize = 8;

/// Tolerance for treating two coordinates as identical.
pub const COORDINATE_EPSILON: f64 = 1e-6;

/// Reorder and cap raw fuzzy hits for `query`.
pub fn rerank(mut hits: Vec<Destination>, query: &str) -> Vec<Destination> {
	let trimmed = query.trim();
	let promoted = exact_position(&hits, trimmed).or_else(|| {
		parse_coordinates(trimmed).and_then(|target| coordinate_position(&hits, target))
	});

	if let Some(position) = promoted
		&& position > 0
	{
		let hit = hits.remove(position);
		hits.insert(0, hit);
	}

	hits.truncate(MAX_SUGGESTIONS);
	hits
}

/// Parse a `lat,lng` pair such as `1.3521, 103.8198`.
pub fn parse_coordinates(query: &str) -> Option<(f64, f64)> {
	let (lat, lng) = query.trim().split_once(',')?;
	let lat: f64 = lat.trim().parse().ok()?;
	let lng: f64 = lng.trim().parse().ok()?;
	let in_range = lat.is_finite()
		&& lng.is_finite()
		&& (-90.0..=90.0).contains(&lat)
		&& (-180.0..=180.0).contains(&lng);
	in_range.then_some((lat, lng))
}

fn exact_position(hits: &[Destination], trimmed: &str) -> Option<usize> {
	if trimmed.is_empty() {
		return None;
	}
	let folded = fold_term(trimmed);
	hits.iter().position(|hit| fold_term(&hit.term) == folded)
}

fn coordinate_position(hits: &[Destination], (lat, lng): (f64, f64)) -> Option<usize> {
	hits.iter().position(|hit| {
		hit.coordinates().is_some_and(|(hit_lat, hit_lng)| {
			(hit_lat - lat).abs() <= COORDINATE_EPSILON && (hit_lng - lng).abs() <= COORDINATE_EPSILON
		})
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn uids(hits: &[Destination]) -> Vec<&str> {
		hits.iter().map(|hit| hit.uid.as_str()).collect()
	}

	#[test]
	fn exact_match_moves_to_front_and_keeps_order() {
		let hits = vec![
			Destination::new("a", "Singapore, Singapore"),
			Destination::new("b", "Singapore Zoo"),
			Destination::new("c", "Singapore"),
			Destination::new("d", "Singaraja"),
		];
		let ranked = rerank(hits, "  SINGAPORE ");
		assert_eq!(uids(&ranked), vec!["c", "a", "b", "d"]);
	}

	#[test]
	fn coordinate_match_moves_to_front() {
		let hits = vec![
			Destination::new("a", "Marina Bay").with_coordinates(1.28, 103.86),
			Destination::new("b", "Orchard").with_coordinates(1.3048, 103.8318),
		];
		let ranked = rerank(hits, "1.3048000004,103.8318");
		assert_eq!(uids(&ranked), vec!["b", "a"]);
	}

	#[test]
	fn coordinates_outside_epsilon_are_not_promoted() {
		let hits = vec![
			Destination::new("a", "Marina Bay").with_coordinates(1.28, 103.86),
			Destination::new("b", "Orchard").with_coordinates(1.3048, 103.8318),
		];
		let ranked = rerank(hits, "1.30481,103.8318");
		assert_eq!(uids(&ranked), vec!["a", "b"]);
	}

	#[test]
	fn exact_match_beats_coordinate_match() {
		let hits = vec![
			Destination::new("coords", "Somewhere").with_coordinates(1.5, 2.5),
			Destination::new("named", "1.5,2.5"),
		];
		let ranked = rerank(hits, "1.5,2.5");
		assert_eq!(uids(&ranked), vec!["named", "coords"]);
	}

	#[test]
	fn truncates_to_cap() {
		let hits: Vec<Destination> = (0..12)
			.map(|n| Destination::new(n.to_string(), format!("Place {n}")))
			.collect();
		let ranked = rerank(hits, "place 11");
		assert_eq!(ranked.len(), MAX_SUGGESTIONS);
		assert_eq!(ranked[0].uid, "11");
	}

	#[test]
	fn empty_hits_stay_empty() {
		assert!(rerank(Vec::new(), "anything").is_empty());
	}

	#[test]
	fn duplicates_pass_through() {
		let hits = vec![Destination::new("a", "Paris"), Destination::new("a", "Paris")];
		assert_eq!(rerank(hits, "par").len(), 2);
	}

	#[test]
	fn parses_coordinate_pairs() {
		assert_eq!(parse_coordinates(" 1.5 , -2.25 "), Some((1.5, -2.25)));
		assert_eq!(parse_coordinates("91,0"), None);
		assert_eq!(parse_coordinates("0,181"), None);
		assert_eq!(parse_coordinates("Paris, France"), None);
		assert_eq!(parse_coordinates("1.5"), None);
		assert_eq!(parse_coordinates("NaN,1"), None);
	}
}
