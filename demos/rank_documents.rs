use okapi::prelude::*;

fn main() {
  let docs = vec![
    "Getting Started with Rust: ownership, borrowing and lifetimes.",
    "Hiring: IT Manager for our remote infrastructure team.",
    "The IT manager approved the Rust rewrite of the billing service.",
    "Python for data science, a practical introduction.",
    "",
  ];

  let query = ["rust", "IT Manager", "", "pyhton"];

  let scorer = Bm25Scorer::new(Bm25Params::new().k1(1.2).b(0.75));
  let ranking = match scorer.rank(&query, &docs) {
    Ok(ranking) => ranking,
    Err(err) => {
      eprintln!("scoring failed: {}", err);
      return;
    }
  };

  println!("Query: {:?}\n", query);
  for (position, doc) in ranking.iter().enumerate() {
    println!("{:>2}. [doc {}] {:>8.4}  {}", position + 1, doc.id, doc.score, docs[doc.id]);
  }

  if !ranking.diagnostics.is_empty() {
    println!("\nDiagnostics:");
    for diagnostic in &ranking.diagnostics {
      println!("  - {}", diagnostic);
    }
  }
}
