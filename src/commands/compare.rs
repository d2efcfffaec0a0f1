//! `tfidf-viewer compare` command - similarity between two indexed files

use tfidf_viewer_core::error::{Result, TfidfError};
use tfidf_viewer_core::index::IndexClient;
use tfidf_viewer_core::viewer::{Comparison, Viewer};

use super::vector::render_vector;
use crate::cli::{Cli, CompareArgs, OutputFormat};

/// Execute the compare command
pub fn execute<C: IndexClient>(cli: &Cli, viewer: &Viewer<C>, args: &CompareArgs) -> Result<()> {
    // No comparison means the index is missing; report it and exit with a data error
    let comparison = viewer
        .compare(&args.index, &args.first, &args.second)?
        .ok_or_else(|| TfidfError::IndexNotFound {
            index: args.index.clone(),
        })?;

    match cli.format {
        OutputFormat::Json => {
            let output = comparison_json(&args.index, &comparison, args.print)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print!("{}", render_comparison(&comparison, args.print)),
    }

    Ok(())
}

fn render_comparison(comparison: &Comparison, print_vectors: bool) -> String {
    let mut out = String::new();
    if print_vectors {
        for document in &comparison.documents {
            out.push_str(&render_vector(document));
        }
    }
    out.push_str(&format!("Similarity = {:.5}\n", comparison.similarity));
    out
}

fn comparison_json(
    index: &str,
    comparison: &Comparison,
    include_terms: bool,
) -> Result<serde_json::Value> {
    let documents = comparison
        .documents
        .iter()
        .map(|document| -> Result<serde_json::Value> {
            let mut value = serde_json::json!({
                "path": document.path,
                "id": document.id,
            });
            if include_terms {
                value["terms"] = serde_json::to_value(&document.vector)?;
            }
            Ok(value)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(serde_json::json!({
        "index": index,
        "similarity": comparison.similarity,
        "documents": documents,
    }))
}
