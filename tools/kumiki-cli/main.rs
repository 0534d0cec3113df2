use clap::{Parser, Subcommand};
use kumiki::prelude::*;
use serde_json::Value;
use std::sync::Arc;

/// Inspect and edit test-flow documents from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional path to an action catalog JSON file used for titles and schemas
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the visualization tree of a test
    Tree { document: String },
    /// Print the definition at a path
    Get { document: String, path: String },
    /// Print the label of the node at a path (the root when omitted)
    Label {
        document: String,
        path: Option<String>,
        /// Prefer descriptions over ids
        #[arg(short, long)]
        description: bool,
    },
    /// Print the schema of the node at a path
    Schema { document: String, path: String },
    /// Replace the value at a path and print the resulting document
    Update {
        document: String,
        path: String,
        /// The new value as JSON
        value: String,
    },
    /// Remove the action at a path and print the resulting document
    Remove { document: String, path: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let provider: Arc<dyn SchemaProvider> = match &cli.catalog {
        Some(path) => Arc::new(ActionCatalog::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load catalog '{}': {}", path, e))
        })),
        None => Arc::new(EmptyCatalog),
    };

    match cli.command {
        Command::Tree { document } => {
            let entity = load_entity(&document, provider);
            print!("{}", entity.to_viz_node());
        }
        Command::Get { document, path } => {
            let entity = load_entity(&document, provider);
            print_json(&entity.node_definition(Some(&path)));
        }
        Command::Label {
            document,
            path,
            description,
        } => {
            let entity = load_entity(&document, provider);
            let label_type = if description {
                NodeLabelType::Description
            } else {
                NodeLabelType::Id
            };
            let path = path.as_deref().unwrap_or(ROOT_PATH);
            println!("{}", entity.node_label(Some(path), label_type));
        }
        Command::Schema { document, path } => {
            let entity = load_entity(&document, provider);
            match entity.node_schema(Some(&path)) {
                Some(schema) => print_json(&schema),
                None => exit_with_error(&format!("No schema found for '{}'", path)),
            }
        }
        Command::Update {
            document,
            path,
            value,
        } => {
            let mut entity = load_entity(&document, provider);
            let value: Value = serde_json::from_str(&value)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse value JSON: {}", e)));
            entity.update_model(Some(&path), value);
            print_json(&entity);
        }
        Command::Remove { document, path } => {
            let mut entity = load_entity(&document, provider);
            entity.remove_step(Some(&path));
            print_json(&entity);
        }
    }
}

fn load_entity(path: &str, provider: Arc<dyn SchemaProvider>) -> TestVisualEntity {
    let resource = TestResource::from_file(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load test '{}': {}", path, e)));
    let document = resource
        .to_json()
        .unwrap_or_else(|| exit_with_error(&format!("'{}' holds no test", path)));
    TestVisualEntity::builder()
        .document(document)
        .schema_provider(provider)
        .build()
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to serialize output: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
