use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a parsed filter tree into a MongoDB query fragment
    Compile {
        #[arg(long, help = "Path to the filter tree, as JSON")]
        tree: String,

        #[arg(
            long,
            help = "Replace literal values with @p1, @p2, ... and print them separately"
        )]
        bind: bool,

        #[arg(long, help = "Reject trees nested deeper than this")]
        max_depth: Option<usize>,

        #[arg(
            long,
            help = "If set, prints the fragment and parameters as JSON"
        )]
        json: bool,
    },
    /// List the operators and functions known to the compiler
    Operators {
        #[arg(long, help = "If set, prints the operator list as JSON")]
        json: bool,
    },
}
