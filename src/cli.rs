use crate::validation::{PropertyPresence, RefPolicy, ValidatorConfig};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oasguard")]
#[command(version)]
#[command(about = "Validate JSON values against OpenAPI / JSON-Schema documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a value file against a schema in a document
    Validate {
        /// Path to the OpenAPI or JSON-Schema document (YAML or JSON)
        #[arg(short, long)]
        document: PathBuf,

        /// Component schema name or JSON pointer (whole document if not specified)
        #[arg(short, long)]
        schema: Option<String>,

        /// Path to the value to validate (YAML or JSON)
        #[arg(short, long)]
        value: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// List component schemas in a document
    Schemas {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        document: PathBuf,
    },

    /// Check every $ref in a document for unresolvable targets and cycles
    Refs {
        /// Path to the OpenAPI or JSON-Schema document
        #[arg(short, long)]
        document: PathBuf,
    },

    /// Start an HTTP service validating request bodies against component schemas
    Serve {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        document: PathBuf,

        /// Port number
        #[arg(short, long, default_value = "3000")]
        port: u16,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

/// Engine switches layered over the `OASGUARD_*` environment configuration
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Resolve one $ref hop per dispatch instead of following chains
    #[arg(long)]
    pub single_hop: bool,

    /// Do not evaluate allOf/anyOf/oneOf (untyped schemas fall back to object)
    #[arg(long)]
    pub no_combinators: bool,

    /// Skip declared properties whose value is falsy (0, false, "", null)
    #[arg(long)]
    pub truthy_properties: bool,

    /// Maximum validation nesting depth
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl EngineArgs {
    pub fn apply(&self, mut config: ValidatorConfig) -> ValidatorConfig {
        if self.single_hop {
            config.ref_policy = RefPolicy::SingleHop;
        }
        if self.no_combinators {
            config.combinators = false;
        }
        if self.truthy_properties {
            config.property_presence = PropertyPresence::Truthy;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        config
    }
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal report
    Text,
    /// JSON report
    Json,
}
