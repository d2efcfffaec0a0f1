use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Index holding both documents
    pub index: String,

    /// Path of the first file, as it was indexed
    pub first: String,

    /// Path of the second file, as it was indexed
    pub second: String,

    /// Print both weighted term vectors before the score
    #[arg(long)]
    pub print: bool,
}

#[derive(Args, Debug, Clone)]
pub struct VectorArgs {
    /// Index holding the document
    pub index: String,

    /// Path of the file, as it was indexed
    pub path: String,
}
