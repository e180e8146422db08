use anyhow::Result;
use serde_json::json;
use tripsearch_core::Destination;

use crate::workflow::Outcome;

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &Outcome) {
	match outcome {
		Outcome::Suggestions { query, results } => {
			if results.is_empty() {
				println!("No destinations match '{query}'");
			}
			for destination in results {
				println!("{}", describe(destination));
			}
		}
		Outcome::Planned { event } => {
			println!(
				"{} ({}), {} to {}, {} room(s) x {} guest(s)",
				event.destination_label,
				event.destination_id,
				event.check_in,
				event.check_out,
				event.rooms,
				event.guests_per_room,
			);
			println!("{}", event.query_string());
		}
		Outcome::Rejected { errors } => {
			for (_, error) in errors.iter() {
				println!("{error}");
			}
		}
	}
}

fn describe(destination: &Destination) -> String {
	let mut line = format!("{}\t{}\t{}", destination.uid, destination.kind, destination.term);
	if let Some(state) = &destination.state {
		line.push_str(&format!(" [{state}]"));
	}
	line
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let payload = match outcome {
		Outcome::Suggestions { query, results } => json!({
			"query": query,
			"results": results,
		}),
		Outcome::Planned { event } => json!({
			"accepted": true,
			"event": event,
			"queryString": event.query_string(),
		}),
		Outcome::Rejected { errors } => json!({
			"accepted": false,
			"errors": errors,
		}),
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use tripsearch_core::{FieldError, FieldErrors};

	use super::*;

	#[test]
	fn json_format_includes_suggestions() {
		let outcome = Outcome::Suggestions {
			query: "sing".into(),
			results: vec![Destination::new("WD0M", "Singapore")],
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "sing");
		assert_eq!(value["results"][0]["uniqueId"], "WD0M");
	}

	#[test]
	fn json_format_lists_field_errors() {
		let outcome = Outcome::Rejected {
			errors: FieldErrors {
				check_in: Some(FieldError::CheckInRequired),
				..FieldErrors::default()
			},
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert_eq!(value["errors"]["checkIn"], "Please select a check-in date");
	}
}
