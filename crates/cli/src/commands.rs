use clap::Subcommand;
use model::audience::filter::AudienceKind;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile an audience filters file into a feed query
    Compile {
        /// Path to the audience filters JSON file
        filters: String,

        /// Audience kind: rn or hcp
        #[arg(long, default_value = "rn")]
        kind: AudienceKind,

        /// Emit a parameterized query with its bind values instead of
        /// inline literals
        #[arg(long)]
        bind: bool,

        /// Optional JSON file mapping specialty names to taxonomy columns
        #[arg(long)]
        taxonomy: Option<String>,
    },

    /// Build and validate the create-audience request payload
    Payload {
        /// Path to the audience filters JSON file
        filters: String,

        /// Audience kind: rn or hcp
        #[arg(long, default_value = "rn")]
        kind: AudienceKind,

        /// Audience name
        #[arg(long)]
        name: String,

        /// Optional audience description
        #[arg(long)]
        description: Option<String>,
    },

    /// Recompile a stored audience record and report drift against its
    /// saved query text
    Inspect {
        /// Path to the audience record JSON file
        audience: String,

        /// Audience kind: rn or hcp
        #[arg(long, default_value = "rn")]
        kind: AudienceKind,
    },
}
