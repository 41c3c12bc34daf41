use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use treegen_core::*;

/// Generate random nested data trees
#[derive(Parser, Debug)]
#[command(name = "treegen", version)]
pub struct Args {
    /// Maximum number of children per mapping or sequence
    #[arg(long, allow_negative_numbers = true)]
    pub breadth: Option<i64>,

    /// Maximum depth of the tree, in edges
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// Allow sequence values
    #[arg(long)]
    pub arrays: bool,

    /// Allow callable stubs
    #[arg(long)]
    pub functions: bool,

    /// Allow timestamp, pattern and error values
    #[arg(long)]
    pub complex: bool,

    /// Place some children in a per-node shared store
    #[arg(long)]
    pub shared_store: bool,

    /// JSON options object, e.g. '{"maxBreadth": 3, "arrays": true}'
    #[arg(long)]
    pub options: Option<String>,

    /// Number of trees to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Print each tree on a single line
    #[arg(long)]
    pub compact: bool,

    /// Print shape statistics after each tree
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Merge the JSON options object with explicit flags. Flags win.
    pub fn generation_options(&self) -> Result<GenerationOptions> {
        let mut options = match &self.options {
            Some(json) => serde_json::from_str::<GenerationOptions>(json)
                .context("--options is not a valid options object")?,
            None => GenerationOptions::default(),
        };

        if let Some(breadth) = self.breadth {
            options.max_breadth = Some(breadth);
        }
        if let Some(height) = self.height {
            options.max_height = Some(height);
        }
        if self.arrays {
            options.arrays = Some(true);
        }
        if self.functions {
            options.functions = Some(true);
        }
        if self.complex {
            options.complex_types = Some(true);
        }
        if self.shared_store {
            options.on_prototype = Some(true);
        }

        Ok(options)
    }
}

/// Generate the requested trees and format them for printing.
pub fn run(args: &Args) -> Result<String> {
    let options = args.generation_options()?;
    let generator = Generator::from_options(&options).context("cannot set up generator")?;
    tracing::debug!(config = %generator.config(), count = args.count, "resolved configuration");

    let mut output = String::new();
    if args.verbose {
        output.push_str(&format_config_output(generator.config()));
        output.push('\n');
    }

    for index in 1..=args.count {
        let tree = generator
            .generate()
            .with_context(|| format!("failed to generate tree {index}"))?;

        if args.count > 1 {
            output.push_str(&format_tree_header(index, args.count));
        }
        if args.compact {
            output.push_str(&tree.render_compact());
            output.push('\n');
        } else {
            output.push_str(&tree.render());
        }
        if args.stats {
            output.push_str(&format_stats(&TreeStats::collect(&tree)));
        }
    }

    Ok(output)
}

/// Format the resolved configuration
pub fn format_config_output(config: &GenerationConfig) -> String {
    let toggle = |enabled: bool| {
        if enabled {
            "enabled".bright_green()
        } else {
            "disabled".bright_red()
        }
    };

    let mut output = String::new();
    output.push_str("Configuration:\n");
    output.push_str(&format!(
        "  Max breadth: {}\n",
        config.max_breadth.to_string().bright_yellow()
    ));
    output.push_str(&format!(
        "  Max height: {}\n",
        config.max_height.to_string().bright_yellow()
    ));
    output.push_str(&format!("  Sequences: {}\n", toggle(config.arrays)));
    output.push_str(&format!("  Callables: {}\n", toggle(config.functions)));
    output.push_str(&format!("  Complex values: {}\n", toggle(config.complex_types)));
    output.push_str(&format!("  Shared store: {}\n", toggle(config.shared_store)));
    output
}

/// Format the separator printed before each of several trees
pub fn format_tree_header(index: usize, total: usize) -> String {
    format!("{}\n", format!("━━━ tree {index}/{total} ━━━").bright_cyan())
}

/// Format tree statistics
pub fn format_stats(stats: &TreeStats) -> String {
    format!("{}\n{}", "Tree statistics:".bright_magenta().bold(), stats)
}
