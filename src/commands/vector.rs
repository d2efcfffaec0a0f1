//! `tfidf-viewer vector` command - print one document's TF-IDF vector

use tfidf_viewer_core::error::Result;
use tfidf_viewer_core::index::IndexClient;
use tfidf_viewer_core::viewer::{DocumentVector, Viewer};

use crate::cli::{Cli, OutputFormat, VectorArgs};

const SEPARATOR_WIDTH: usize = 40;

/// Execute the vector command
pub fn execute<C: IndexClient>(cli: &Cli, viewer: &Viewer<C>, args: &VectorArgs) -> Result<()> {
    let document = viewer.vector_for_path(&args.index, &args.path)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "index": args.index,
                "path": document.path,
                "id": document.id,
                "terms": document.vector,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print!("{}", render_vector(&document)),
    }

    Ok(())
}

/// Header, one `term weight` line per term, then a separator
pub fn render_vector(document: &DocumentVector) -> String {
    let mut out = format!("TFIDF FILE {}\n", document.path);
    for (term, weight) in document.vector.iter() {
        out.push_str(&format!("{} {}\n", term, weight));
    }
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out
}
