use okapi::prelude::*;
use okapi::scoring::FrequencyTable;
use std::collections::BTreeMap;

const EPS: f64 = 1e-9;

#[test]
fn test_every_document_ranked_once() {
  let docs = vec![
    "Rust is a systems programming language".to_string(),
    "Python is popular for data science".to_string(),
    "Rust and Python can interoperate".to_string(),
    String::new(),
  ];

  let ranking = rank(&["rust", "python"], &docs).unwrap();

  assert_eq!(ranking.len(), docs.len());
  let mut ids: Vec<usize> = ranking.ids().copied().collect();
  ids.sort();
  assert_eq!(ids, vec![0, 1, 2, 3]);

  // both terms hit document 2
  assert_eq!(ranking.top().map(|d| d.id), Some(2));
}

#[test]
fn test_scores_are_descending() {
  let docs = [
    "apple banana",
    "apple apple apple",
    "cherry",
    "banana apple cherry apple",
  ];
  let ranking = rank(&["apple", "cherry"], &docs).unwrap();

  let scores: Vec<f64> = ranking.iter().map(|d| d.score).collect();
  assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_term_with_no_hits_does_not_fail() {
  let docs = ["alpha beta", "gamma delta"];
  let ranking = rank(&["omega"], &docs).unwrap();

  assert!(ranking.iter().all(|d| d.score == 0.0));
  assert_eq!(
    ranking.diagnostics,
    vec![Diagnostic::NoMatchingDocuments {
      term_index: 0,
      term: "omega".to_string(),
      suggestion: None,
    }]
  );
}

#[test]
fn test_tokenize_round_trip() {
  let text = "the quick brown fox jumps";
  let words: Vec<String> = text.split(' ').map(str::to_owned).collect();
  assert_eq!(tokenize(text), words);
  assert_eq!(normalize(text), text.to_uppercase());
}

#[test]
fn test_scoring_is_deterministic() {
  let docs = [
    "the cat sat on the mat",
    "the dog chased the cat",
    "a bird in the hand",
    "cat cat cat",
  ];
  let query = ["cat", "the mat", "bird"];

  let first = rank(&query, &docs).unwrap();
  let second = rank(&query, &docs).unwrap();

  assert_eq!(first.ids().collect::<Vec<_>>(), second.ids().collect::<Vec<_>>());
  for (a, b) in first.iter().zip(second.iter()) {
    assert_eq!(a.score.to_bits(), b.score.to_bits());
  }
}

#[test]
fn test_phrase_matches_do_not_overlap() {
  let docs = ["AA AA AA", "x AA AA"];
  let terms = [QueryTerm::parse("aa aa")];

  // overlapping matches would give 2 for the first document
  let table = FrequencyTable::build(&terms, &docs);
  assert_eq!(table.frequency(0, 0), 1);
  assert_eq!(table.frequency(1, 0), 1);

  // equal counts, equal lengths: equal scores
  let ranking = Bm25Scorer::default().rank(&["aa aa"], &docs).unwrap();
  let expected = term_weight(idf(2, 2), 1, 3, 3.0, 1.2, 0.75);
  assert!((ranking.get(&0).unwrap() - expected).abs() < EPS);
  assert!((ranking.get(&1).unwrap() - expected).abs() < EPS);
}

#[test]
fn test_phrase_copied_from_document_matches() {
  let docs = ["Our IT-Manager team grew", "Nobody here"];
  let ranking = rank(&["IT-Manager team"], &docs).unwrap();

  assert_eq!(ranking.top().map(|d| d.id), Some(0));
  assert!(ranking.get(&0).unwrap() > 0.0);
  assert!(ranking.diagnostics.is_empty());
}

#[test]
fn test_zero_saturation_orders_scores() {
  let docs = ["cat sat", "dog ran", "cat cat"];
  let ranking = Bm25Scorer::new(Bm25Params::new().k1(0.0))
    .rank(&["cat"], &docs)
    .unwrap();

  assert_eq!(ranking.get(&1), Some(0.0));
  assert!(ranking.iter().all(|d| d.score.is_finite()));
  // k1 = 0 ignores frequency, so both cat documents tie and keep input order
  assert_eq!(ranking.ids().copied().collect::<Vec<_>>(), vec![0, 2, 1]);
}

#[test]
fn test_case_insensitive() {
  let docs = ["The Cat Sat", "A dog"];
  let lower = rank(&["cat"], &docs).unwrap();
  let upper = rank(&["CAT"], &docs).unwrap();

  assert_eq!(lower, upper);
  assert!(lower.get(&0).unwrap() > 0.0);
}

#[test]
fn test_two_occurrences_outrank_one() {
  let docs = ["Term appears once", "Term Term appears twice", "No match here"];
  let ranking = rank(&["Term"], &docs).unwrap();

  assert_eq!(ranking.ids().copied().collect::<Vec<_>>(), vec![1, 0, 2]);
  assert!(ranking.get(&1).unwrap() > ranking.get(&0).unwrap());
  assert_eq!(ranking.get(&2), Some(0.0));
}

#[test]
fn test_empty_term_ignored() {
  let docs = ["Term appears once", "Term Term appears twice", "No match here"];
  let with_empty = rank(&["Term", ""], &docs).unwrap();
  let without = rank(&["Term"], &docs).unwrap();

  for (a, b) in with_empty.iter().zip(without.iter()) {
    assert_eq!(a.id, b.id);
    assert_eq!(a.score.to_bits(), b.score.to_bits());
  }

  let empty_count = with_empty
    .diagnostics
    .iter()
    .filter(|d| matches!(d, Diagnostic::EmptyTerm { .. }))
    .count();
  assert_eq!(empty_count, 1);
}

#[test]
fn test_term_in_every_document_of_two_scores_positive() {
  let docs = ["shared word", "shared again"];
  let ranking = rank(&["shared"], &docs).unwrap();

  // ln(2.5 - 2/2.5) = ln(1.7)
  assert!(ranking.iter().all(|d| d.score > 0.0));
}

#[test]
fn test_term_in_single_document_collection_scores_negative() {
  // ln(1.5 - 1/1.5) is below zero and is not clamped
  let ranking = rank(&["shared"], &["shared"]).unwrap();
  assert!(ranking.get(&0).unwrap() < 0.0);
}

#[test]
fn test_keyed_documents() {
  let mut docs = BTreeMap::new();
  docs.insert("intro", "Getting started with Rust");
  docs.insert("async", "Async Rust with tokio and Rust futures");
  docs.insert("web", "Building web apps");

  let scorer = Bm25Scorer::new(Bm25Params::new().k1(1.5));
  let ranking = scorer.rank_keyed(&["rust"], docs).unwrap();

  assert_eq!(scorer.params().k1, 1.5);
  assert_eq!(ranking.len(), 3);
  assert_eq!(ranking.top().map(|d| d.id), Some("async"));
  assert_eq!(ranking.get(&"web"), Some(0.0));

  let scores = ranking.into_scores();
  assert_eq!(scores[0].0, "async");
  assert_eq!(scores[2], ("web", 0.0));
  assert!(scores[0].1 > scores[1].1);
}

#[test]
fn test_tuning_parameters_change_scores() {
  let docs = ["rust", "rust is a language with a long description here"];
  let default = rank(&["rust"], &docs).unwrap();
  let flat = Bm25Scorer::new(Bm25Params::new().b(0.0))
    .rank(&["rust"], &docs)
    .unwrap();

  // without length normalization both documents score the same
  assert!((flat.get(&0).unwrap() - flat.get(&1).unwrap()).abs() < EPS);
  assert!(default.get(&0).unwrap() > default.get(&1).unwrap());
}

#[cfg(feature = "serde")]
#[test]
fn test_params_from_json() {
  let params = Bm25Params::from_json(r#"{"k1": 2.0, "b": 0.5}"#).unwrap();
  let ranking = Bm25Scorer::new(params)
    .rank(&["x"], &["x y", "z"])
    .unwrap();
  assert_eq!(ranking.top().map(|d| d.id), Some(0));
}

#[cfg(feature = "serde")]
#[test]
fn test_ranking_serializes() {
  let ranking = rank(&["cat", ""], &["cat", "dog"]).unwrap();
  let json = serde_json::to_value(&ranking).unwrap();

  assert_eq!(json["documents"][0]["id"], 0);
  assert_eq!(json["documents"][1]["score"], 0.0);
  assert_eq!(json["diagnostics"][0]["type"], "empty_term");
}

#[cfg(feature = "suggest")]
#[test]
fn test_misspelled_term_gets_suggestion() {
  let docs = ["Rust programming guide", "Learning rust quickly"];
  let ranking = rank(&["programing"], &docs).unwrap();

  match &ranking.diagnostics[..] {
    [Diagnostic::NoMatchingDocuments { suggestion, .. }] => {
      assert_eq!(suggestion.as_deref(), Some("programming"));
    }
    other => panic!("unexpected diagnostics: {:?}", other),
  }
}
