use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Build the query from a configuration file
    Build {
        #[arg(long, default_value = "config.json", help = "Config file path")]
        config: String,

        #[arg(
            long,
            help = "If specified, writes the query to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print the planned select statement as JSON
    Plan {
        #[arg(long, default_value = "config.json", help = "Config file path")]
        config: String,
    },
}
